pub mod lenient;
pub mod quotation;
