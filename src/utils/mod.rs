pub mod form_value;
