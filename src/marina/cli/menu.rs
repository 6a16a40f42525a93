//! The interactive menu.
//!
//! One key per line selects an operation; some operations then ask for one or two more
//! lines. Recoverable errors are printed and the menu comes back. Fatal errors (the data
//! file cannot be written) end the session. Running out of input behaves like `X`.

use super::print::{print_error, print_inventory, print_messages};
use marina::api::{CmdResult, MarinaApi};
use marina::error::Result;
use marina::store::DataStore;
use std::io::{BufRead, Write};

pub(crate) const BANNER: &str = "Welcome to the Boat Management System";
pub(crate) const MENU: &str = "(I)nventory, (A)dd, (R)emove, (P)ayment, (M)onth, e(X)it : ";
pub(crate) const FAREWELL: &str = "Exiting the Boat Management System";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuOption {
    Inventory,
    Add,
    Remove,
    Payment,
    Month,
    Exit,
    Invalid(char),
}

impl MenuOption {
    pub(crate) fn from_char(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'I' => MenuOption::Inventory,
            'A' => MenuOption::Add,
            'R' => MenuOption::Remove,
            'P' => MenuOption::Payment,
            'M' => MenuOption::Month,
            'X' => MenuOption::Exit,
            _ => MenuOption::Invalid(c),
        }
    }
}

pub(crate) struct Session<'a, S: DataStore, R, W> {
    api: &'a mut MarinaApi<S>,
    input: R,
    out: W,
    name_width: usize,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Session<'a, S, R, W> {
    pub(crate) fn new(api: &'a mut MarinaApi<S>, input: R, out: W, name_width: usize) -> Self {
        Self {
            api,
            input,
            out,
            name_width,
        }
    }

    /// Runs the menu until the user exits or input ends, then saves.
    pub(crate) fn run(mut self) -> Result<()> {
        writeln!(self.out, "{}", BANNER)?;
        writeln!(self.out, "{}", "-".repeat(BANNER.len()))?;

        loop {
            write!(self.out, "{}", MENU)?;
            self.out.flush()?;

            let Some(line) = self.read_nonblank()? else {
                break;
            };
            let Some(key) = line.chars().next() else {
                continue;
            };

            let keep_going = match MenuOption::from_char(key) {
                MenuOption::Inventory => {
                    let result = self.api.list_boats()?;
                    print_inventory(&mut self.out, &result.listed_boats, self.name_width)?;
                    true
                }
                MenuOption::Add => self.add()?,
                MenuOption::Remove => self.remove()?,
                MenuOption::Payment => self.payment()?,
                MenuOption::Month => {
                    let result = self.api.accrue_monthly();
                    self.report(result)?;
                    true
                }
                MenuOption::Exit => break,
                MenuOption::Invalid(c) => {
                    writeln!(self.out, "Invalid option {}", c)?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }

        self.api.save()?;
        writeln!(self.out, "{}", FAREWELL)?;
        self.out.flush()?;
        Ok(())
    }

    fn add(&mut self) -> Result<bool> {
        let Some(csv) = self.prompt("Please enter the boat data in CSV format: ")? else {
            return Ok(false);
        };
        let result = self.api.add_boat(&csv);
        self.report(result)?;
        Ok(true)
    }

    fn remove(&mut self) -> Result<bool> {
        let Some(name) = self.prompt("Please enter the boat name: ")? else {
            return Ok(false);
        };
        let result = self.api.remove_boat(&name);
        self.report(result)?;
        Ok(true)
    }

    fn payment(&mut self) -> Result<bool> {
        let Some(name) = self.prompt("Please enter the boat name: ")? else {
            return Ok(false);
        };
        if self.api.find_boat(&name).is_none() {
            writeln!(self.out, "No boat with that name")?;
            return Ok(true);
        }

        let Some(amount_text) = self.prompt("Please enter the amount to be paid: ")? else {
            return Ok(false);
        };
        let amount: f64 = match amount_text.parse() {
            Ok(amount) => amount,
            Err(_) => {
                writeln!(self.out, "Invalid amount {}", amount_text)?;
                return Ok(true);
            }
        };

        let result = self.api.accept_payment(&name, amount);
        self.report(result)?;
        Ok(true)
    }

    fn report(&mut self, result: Result<CmdResult>) -> Result<()> {
        match result {
            Ok(result) => print_messages(&mut self.out, &result.messages)?,
            Err(e) if !e.is_fatal() => {
                tracing::debug!(error = %e, "operation refused");
                print_error(&mut self.out, &e)?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        self.read_nonblank()
    }

    /// Next non-blank line, trimmed. `None` once input is exhausted.
    fn read_nonblank(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.input.read_line(&mut buf)? == 0 {
                tracing::debug!("input ended");
                return Ok(None);
            }
            let line = buf.trim();
            if !line.is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marina::store::memory::InMemoryStore;
    use std::io::Cursor;

    const DATA: &str = "Bob,10.00,slip,4,100.00\nalice,8.00,land,C,0.00\n";

    fn session(input: &str) -> (String, MarinaApi<InMemoryStore>) {
        colored::control::set_override(false);
        let (mut api, _) = MarinaApi::open(InMemoryStore::with_contents(DATA)).unwrap();
        let mut out = Vec::new();
        Session::new(&mut api, Cursor::new(input.to_string()), &mut out, 20)
            .run()
            .unwrap();
        (String::from_utf8(out).unwrap(), api)
    }

    #[test]
    fn test_menu_keys_ignore_case() {
        assert_eq!(MenuOption::from_char('i'), MenuOption::Inventory);
        assert_eq!(MenuOption::from_char('X'), MenuOption::Exit);
        assert_eq!(MenuOption::from_char('m'), MenuOption::Month);
        assert_eq!(MenuOption::from_char('z'), MenuOption::Invalid('z'));
    }

    #[test]
    fn test_inventory_is_sorted() {
        let (out, _) = session("i\nx\n");
        let alice = out.find("alice").unwrap();
        let bob = out.find("Bob").unwrap();
        assert!(alice < bob);
        assert!(out.starts_with(BANNER));
        assert!(out.ends_with(&format!("{}\n", FAREWELL)));
    }

    #[test]
    fn test_exit_saves() {
        let (_, api) = session("a\nCarl,12,storage,3,0\nx\n");
        assert!(api.store().contents().contains("Carl,12.00,storage,3,0.00"));
    }

    #[test]
    fn test_end_of_input_saves() {
        let (out, api) = session("r\nbob\n");
        assert!(out.contains("Boat bob removed."));
        assert!(!api.store().contents().contains("Bob"));
    }

    #[test]
    fn test_payment_flow() {
        let (out, api) = session("p\nbob\n150\np\nBOB\n40\np\nnobody\nx\n");
        assert!(out.contains("That is more than the amount owed, $100.00"));
        assert!(out.contains("Payment accepted. New amount owed: $60.00"));
        assert!(out.contains("No boat with that name"));
        assert_eq!(api.boats().find("Bob").unwrap().amount_owed(), 60.0);
    }

    #[test]
    fn test_payment_with_garbage_amount() {
        let (out, api) = session("p\nBob\nten\nx\n");
        assert!(out.contains("Invalid amount ten"));
        assert_eq!(api.boats().find("Bob").unwrap().amount_owed(), 100.0);
    }

    #[test]
    fn test_invalid_option_is_reported() {
        let (out, _) = session("q\nx\n");
        assert!(out.contains("Invalid option q"));
    }

    #[test]
    fn test_bad_add_keeps_session_going() {
        let (out, api) = session("a\njust a name\ni\nx\n");
        assert!(out.contains("Invalid boat data"));
        assert_eq!(api.boats().len(), 2);
    }

    #[test]
    fn test_month_then_save() {
        let (_, api) = session("m\nx\n");
        // 10ft slip: 100.00 + 125.00; 8ft land: 112.00
        assert!(api.store().contents().contains("Bob,10.00,slip,4,225.00"));
        assert!(api.store().contents().contains("alice,8.00,land,C,112.00"));
    }

    #[test]
    fn test_failed_save_is_returned() {
        colored::control::set_override(false);
        let (mut api, _) = MarinaApi::open(InMemoryStore::with_contents(DATA)).unwrap();
        api.store_mut().set_fail_writes(true);
        let mut out = Vec::new();
        let err = Session::new(&mut api, Cursor::new("x\n".to_string()), &mut out, 20)
            .run()
            .unwrap_err();
        assert!(err.is_fatal());
        assert!(!String::from_utf8(out).unwrap().contains(FAREWELL));
    }
}
