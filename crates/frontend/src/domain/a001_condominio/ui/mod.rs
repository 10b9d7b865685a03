pub mod unit_field;
