use crate::FilterArg;
use contact_form_validation::{filter_text, FilterMode};

pub fn execute(mode: FilterArg, text: &str) {
    let mode = match mode {
        FilterArg::Alpha => FilterMode::Alpha,
        FilterArg::Phone => FilterMode::PhoneDigitsWithHyphen,
    };
    println!("{}", filter_text(text, mode));
}
