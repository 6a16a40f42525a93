use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::BoatStore;

pub fn run(boats: &mut BoatStore, name: &str) -> Result<CmdResult> {
    let name = name.trim();
    let removed = boats.remove(name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Boat {} removed.", name)));
    Ok(result.with_affected_boats(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::MarinaError;

    #[test]
    fn test_removes_by_name_ignoring_case() {
        let mut boats = BoatStore::new();
        add::run(&mut boats, "Big Brother,20,slip,27,0").unwrap();

        let result = run(&mut boats, "big brother").unwrap();
        assert_eq!(result.affected_boats[0].name(), "Big Brother");
        assert_eq!(result.messages[0].content, "Boat big brother removed.");
        assert!(boats.is_empty());
    }

    #[test]
    fn test_missing_boat_is_not_found() {
        let mut boats = BoatStore::new();
        add::run(&mut boats, "Big Brother,20,slip,27,0").unwrap();

        let err = run(&mut boats, "nonexistent").unwrap_err();
        assert!(matches!(err, MarinaError::NotFound(_)));
        assert_eq!(err.to_string(), "No boat with that name");
        assert_eq!(boats.len(), 1);
    }
}
