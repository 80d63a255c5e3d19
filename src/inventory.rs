//! Records item quantities, refusing to store a negative one.

use log::info;
use log::warn;
use std::collections::HashMap;
use std::fmt::Display;

/// Item name to quantity in stock.
pub type Inventory = HashMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    NegativeQuantity { item: String, quantity: i64 },
}

/// Sets the quantity of `item` to `quantity`, replacing whatever was there before. A negative
/// quantity is rejected and `inventory` is left untouched.
pub fn update_inventory(
    inventory: &mut Inventory,
    item: &str,
    quantity: i64,
) -> Result<(), InventoryError> {
    let Ok(stored) = u64::try_from(quantity) else {
        warn!("Rejected quantity {quantity} for {item}");
        return Err(InventoryError::NegativeQuantity {
            item: item.to_owned(),
            quantity,
        });
    };
    info!("Set {item} to {stored}");
    inventory.insert(item.to_owned(), stored);
    Ok(())
}

/// Total quantity across all items. Summed as `u128`, which can't overflow: there are at most
/// `usize::MAX` entries of at most `u64::MAX` each.
pub fn total_items(inventory: &Inventory) -> u128 {
    inventory.values().map(|&quantity| u128::from(quantity)).sum()
}

impl Display for InventoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryError::NegativeQuantity { item, quantity } => {
                write!(f, "Cannot update inventory with a negative quantity")?;
                if f.alternate() {
                    write!(f, " ({item} = {quantity})")?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for InventoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_non_negative_quantities() {
        let mut inventory = Inventory::new();
        for quantity in [0, 1, 5, 200, i64::MAX] {
            update_inventory(&mut inventory, "Hammer", quantity).unwrap();
            assert_eq!(inventory["Hammer"], quantity as u64);
        }
    }

    #[test]
    fn last_write_wins() {
        let mut inventory = Inventory::new();
        update_inventory(&mut inventory, "Nails", 200).unwrap();
        update_inventory(&mut inventory, "Nails", 3).unwrap();
        assert_eq!(inventory["Nails"], 3);
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let mut inventory = Inventory::new();
        update_inventory(&mut inventory, "Screws", 7).unwrap();
        for quantity in [-1, -100, i64::MIN] {
            let error = update_inventory(&mut inventory, "Screws", quantity).unwrap_err();
            assert_eq!(
                error.to_string(),
                "Cannot update inventory with a negative quantity"
            );
            assert_eq!(inventory["Screws"], 7);
        }
        let error = update_inventory(&mut inventory, "Bolts", -2).unwrap_err();
        assert!(!inventory.contains_key("Bolts"));
        assert_eq!(
            format!("{error:#}"),
            "Cannot update inventory with a negative quantity (Bolts = -2)"
        );
    }

    #[test]
    fn totals() {
        let mut inventory = Inventory::new();
        assert_eq!(total_items(&inventory), 0);
        update_inventory(&mut inventory, "Hammer", 5).unwrap();
        update_inventory(&mut inventory, "Nails", 200).unwrap();
        update_inventory(&mut inventory, "Screwdriver", 10).unwrap();
        assert_eq!(total_items(&inventory), 215);
    }

    #[test]
    fn total_wider_than_any_quantity() {
        let mut inventory = Inventory::new();
        update_inventory(&mut inventory, "Nails", i64::MAX).unwrap();
        update_inventory(&mut inventory, "Screws", i64::MAX).unwrap();
        assert_eq!(total_items(&inventory), 2 * i64::MAX as u128);
        inventory.insert("Washers".to_owned(), u64::MAX);
        assert_eq!(
            total_items(&inventory),
            2 * i64::MAX as u128 + u64::MAX as u128
        );
    }
}
