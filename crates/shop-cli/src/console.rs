//! # Console Session
//!
//! Line-oriented shopping loop over any `BufRead`/`Write` pair.
//!
//! ```text
//!            ┌──────────────── 0 ───────────────► exit
//!            │
//!   ┌────────┴───────┐  position  ┌──────────────┐
//!   │   Selection    ├───────────►│   Quantity   │── purchase ──┐
//!   └──┬──────────▲──┘            └──────────────┘              │
//!      │ add key  └──────────────────────────────────────────────┘
//!      ▼                                                        ▲
//!   ┌──────────────┐  name  ┌──────────────┐  price             │
//!   │ ProductName  ├───────►│ ProductPrice ├────────────────────┘
//!   └──────────────┘        └──────────────┘
//! ```
//!
//! Input that does not parse re-prompts the same state. End of input ends
//! the session like `0` does.

use shop_core::{Customer, Money, Shop, ShopError};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Menu number that ends the session
pub const EXIT_KEY: i64 = 0;

/// Menu number that opens the add-product flow unless configured otherwise
pub const DEFAULT_ADD_PRODUCT_KEY: i64 = 3;

/// What a number typed at the menu means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Exit,
    AddProduct,
    /// 1-based catalog position
    Purchase { position: i64 },
}

impl Selection {
    pub fn from_input(value: i64, add_product_key: i64) -> Self {
        if value == EXIT_KEY {
            Selection::Exit
        } else if value == add_product_key {
            Selection::AddProduct
        } else {
            Selection::Purchase { position: value }
        }
    }
}

/// What the session is waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Prompt {
    Selection,
    Quantity { position: i64 },
    ProductName,
    ProductPrice { name: String },
}

/// Interactive shop session
pub struct Console<R, W> {
    input: R,
    output: W,
    add_product_key: i64,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            add_product_key: DEFAULT_ADD_PRODUCT_KEY,
        }
    }

    /// Builder: set the menu number for adding a product
    pub fn with_add_product_key(mut self, key: i64) -> Self {
        self.add_product_key = key;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the customer picks `0` or input ends
    pub fn run(&mut self, shop: &mut Shop, customer: &mut Customer) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "Customer balance before shopping: {}",
            customer.balance()
        )?;

        let mut prompt = Prompt::Selection;
        loop {
            self.show(&prompt, shop)?;

            let Some(line) = self.read_line()? else {
                info!("Input closed, ending session");
                break;
            };

            match self.step(prompt, &line, shop, customer)? {
                Some(next) => prompt = next,
                None => break,
            }
            self.print_notifications(customer)?;
        }

        writeln!(self.output, "Thank you for shopping.")?;
        self.output.flush()?;
        Ok(())
    }

    fn show(&mut self, prompt: &Prompt, shop: &Shop) -> anyhow::Result<()> {
        match prompt {
            Prompt::Selection => {
                writeln!(self.output, "Choose a product to buy:")?;
                writeln!(self.output, "Available products:")?;
                for line in shop.list_products() {
                    writeln!(self.output, "{}", line)?;
                }
                writeln!(self.output, "{}. Finish shopping", EXIT_KEY)?;
                writeln!(self.output, "{}. Add product", self.add_product_key)?;
            }
            Prompt::Quantity { .. } => writeln!(self.output, "Enter quantity:")?,
            Prompt::ProductName => writeln!(self.output, "Enter product name:")?,
            Prompt::ProductPrice { .. } => writeln!(self.output, "Enter product price:")?,
        }
        self.output.flush()?;
        Ok(())
    }

    /// Apply one line of input; `None` ends the session
    fn step(
        &mut self,
        prompt: Prompt,
        line: &str,
        shop: &mut Shop,
        customer: &mut Customer,
    ) -> anyhow::Result<Option<Prompt>> {
        debug!(?prompt, line, "Console input");

        let next = match prompt {
            Prompt::Selection => match parse_number(line) {
                None => {
                    self.reject_number(line)?;
                    Prompt::Selection
                }
                Some(value) => match Selection::from_input(value, self.add_product_key) {
                    Selection::Exit => return Ok(None),
                    Selection::AddProduct => Prompt::ProductName,
                    Selection::Purchase { position } => Prompt::Quantity { position },
                },
            },

            Prompt::Quantity { position } => match parse_number(line) {
                None => {
                    self.reject_number(line)?;
                    Prompt::Quantity { position }
                }
                Some(quantity) => {
                    self.purchase(shop, customer, position, quantity)?;
                    Prompt::Selection
                }
            },

            Prompt::ProductName => Prompt::ProductPrice {
                name: line.trim().to_string(),
            },

            Prompt::ProductPrice { name } => match Money::parse(line, shop.balance().currency) {
                Ok(price) => {
                    shop.add_product(name, price);
                    Prompt::Selection
                }
                Err(err) => {
                    writeln!(self.output, "{}. Enter a price such as 49.99.", err)?;
                    Prompt::ProductPrice { name }
                }
            },
        };

        Ok(Some(next))
    }

    fn purchase(
        &mut self,
        shop: &mut Shop,
        customer: &mut Customer,
        position: i64,
        quantity: i64,
    ) -> anyhow::Result<()> {
        let outcome = position
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .ok_or(ShopError::ProductNotFound { position })
            .and_then(|index| shop.purchase(index, quantity, customer));

        match outcome {
            Ok(receipt) => writeln!(self.output, "{}", receipt)?,
            Err(err) if err.is_recoverable() => writeln!(self.output, "{}", err)?,
            Err(err) => return Err(err.into()),
        }

        writeln!(
            self.output,
            "Customer balance after shopping: {}",
            customer.balance()
        )?;
        writeln!(self.output, "Shop balance: {}", shop.balance())?;
        Ok(())
    }

    fn print_notifications(&mut self, customer: &mut Customer) -> anyhow::Result<()> {
        for message in customer.take_notifications() {
            writeln!(self.output, "Notification for customer: {}", message)?;
        }
        Ok(())
    }

    fn reject_number(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.output, "Not a number: {:?}. Try again.", line.trim())?;
        Ok(())
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(|c| c == '\r' || c == '\n').to_string()))
    }
}

fn parse_number(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}
