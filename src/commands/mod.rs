pub mod handle_country_codes;
