use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::BoatStore;
use crate::store::codec::decode_record;

/// Adds a boat from a `name,length,type,payload,amountOwed` line.
pub fn run(boats: &mut BoatStore, csv: &str) -> Result<CmdResult> {
    let record = decode_record(csv.trim())?;
    boats.add(record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Boat {} added.", record.name())));
    Ok(result.with_affected_boats(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MarinaError, ParseError};
    use crate::inventory::MAX_BOATS;
    use crate::model::StorageLocation;

    #[test]
    fn test_adds_boat_from_csv() {
        let mut boats = BoatStore::new();
        let result = run(&mut boats, "  Sea Breeze,22,trailer,KZ 99,10.5").unwrap();

        assert_eq!(result.affected_boats.len(), 1);
        let boat = boats.find("sea breeze").unwrap();
        assert_eq!(boat.location(), &StorageLocation::Trailer("KZ 99".into()));
        assert_eq!(boat.amount_owed(), 10.5);
    }

    #[test]
    fn test_malformed_data_is_rejected() {
        let mut boats = BoatStore::new();
        let err = run(&mut boats, "Half,a,boat").unwrap_err();
        assert!(matches!(
            err,
            MarinaError::Parse(ParseError::FieldCount { found: 3, .. })
        ));
        assert!(boats.is_empty());
    }

    #[test]
    fn test_unknown_type_is_kept() {
        let mut boats = BoatStore::new();
        run(&mut boats, "Odd,12,houseboat,7,0").unwrap();
        assert_eq!(boats.find("Odd").unwrap().location(), &StorageLocation::Unknown);
    }

    #[test]
    fn test_full_marina_refuses_more() {
        let mut boats = BoatStore::new();
        for i in 0..MAX_BOATS {
            run(&mut boats, &format!("Boat {},10,slip,1,0", i)).unwrap();
        }
        let err = run(&mut boats, "Late,10,slip,1,0").unwrap_err();
        assert!(matches!(err, MarinaError::StoreFull { .. }));
        assert_eq!(boats.len(), MAX_BOATS);
    }
}
