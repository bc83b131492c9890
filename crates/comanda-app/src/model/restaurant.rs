/// One menu entry the cart can reference.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    /// Unit price in centavos.
    pub price: i64,
}

/// A physical table, identified both by the number printed on it and by the
/// identifier the backend knows it by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub id: i64,
    pub number: u32,
}

/// Static reference data for the restaurant the session runs against.
///
/// Injected as the cart store's context (for pricing) and consulted by the
/// checkout composition (for table resolution).
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub tables: Vec<Table>,
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    /// Resolves a printed table number to the table record.
    ///
    /// The table list is small; a linear scan is the lookup.
    pub fn table_by_number(&self, number: u32) -> Option<&Table> {
        self.tables.iter().find(|table| table.number == number)
    }

    pub fn menu_item(&self, item_id: i64) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant() -> Restaurant {
        Restaurant {
            id: 7,
            name: "Cantina".to_string(),
            tables: vec![
                Table { id: 101, number: 1 },
                Table { id: 102, number: 2 },
            ],
            menu: vec![MenuItem {
                id: 11,
                name: "Feijoada".to_string(),
                price: 4500,
            }],
        }
    }

    #[test]
    fn test_table_lookup_uses_printed_number() {
        let r = restaurant();
        assert_eq!(r.table_by_number(2).map(|t| t.id), Some(102));
        assert!(r.table_by_number(9).is_none());
    }

    #[test]
    fn test_menu_lookup_by_id() {
        let r = restaurant();
        assert_eq!(r.menu_item(11).map(|i| i.price), Some(4500));
        assert!(r.menu_item(99).is_none());
    }
}
