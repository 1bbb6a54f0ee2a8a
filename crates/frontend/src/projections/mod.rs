pub mod p900_dealer_inventory;
