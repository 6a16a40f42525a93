use crate::billing;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::BoatStore;

pub fn run(boats: &mut BoatStore, name: &str, amount: f64) -> Result<CmdResult> {
    let balance = billing::accept_payment(boats, name.trim(), amount)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Payment accepted. New amount owed: ${:.2}",
        balance
    )));
    Ok(result.with_balance(balance))
}
