use crate::billing;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::BoatStore;

/// Bills one month of storage to every boat.
pub fn run(boats: &mut BoatStore) -> Result<CmdResult> {
    let billed = billing::accrue_monthly(boats)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Monthly charges applied to {} boats (${:.2} total).",
        boats.len(),
        billed
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn test_charges_every_boat() {
        let mut boats = BoatStore::new();
        add::run(&mut boats, "Slippy,20,slip,3,0").unwrap();
        add::run(&mut boats, "Landy,10,land,B,5").unwrap();

        let result = run(&mut boats).unwrap();

        assert_eq!(boats.find("Slippy").unwrap().amount_owed(), 250.0);
        assert_eq!(boats.find("Landy").unwrap().amount_owed(), 145.0);
        assert_eq!(
            result.messages[0].content,
            "Monthly charges applied to 2 boats ($390.00 total)."
        );
    }
}
