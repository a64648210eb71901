pub mod health;
pub mod quotation;
pub mod reference;
