use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::BoatStore;

pub fn run(boats: &BoatStore) -> Result<CmdResult> {
    let listed = boats.list_sorted().into_iter().cloned().collect();
    Ok(CmdResult::default().with_listed_boats(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn test_lists_sorted_by_name() {
        let mut boats = BoatStore::new();
        add::run(&mut boats, "Bob,10,slip,1,0").unwrap();
        add::run(&mut boats, "alice,8,land,A,0").unwrap();
        add::run(&mut boats, "Carl,12,storage,3,0").unwrap();

        let result = run(&boats).unwrap();
        let names: Vec<_> = result.listed_boats.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["alice", "Bob", "Carl"]);
    }

    #[test]
    fn test_empty_inventory_lists_nothing() {
        let result = run(&BoatStore::new()).unwrap();
        assert!(result.listed_boats.is_empty());
        assert!(result.messages.is_empty());
    }
}
