pub mod cheque_book;
pub mod csv_import;
pub mod normalize;
