pub mod db;
pub mod unit_of_work;
