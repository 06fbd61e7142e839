pub mod availability;
pub mod department;
pub mod employee;
pub mod equipment;
pub mod position;
pub mod reference;
pub mod sentinel;
