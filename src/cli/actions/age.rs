use crate::signup::{
    age::{derive_age, today},
    DerivedAge,
};

#[derive(Debug)]
pub struct Args {
    pub date_of_birth: String,
}

/// Age line for the terminal; a rejected date is flagged so it stands out from
/// the "not entered" placeholder.
#[must_use]
pub fn render(age: DerivedAge) -> String {
    if age.is_error() {
        format!("{age} (not a valid past date, expected YYYY-MM-DD)")
    } else {
        age.to_string()
    }
}

/// Print the age display for a date of birth, relative to the local date.
pub fn execute(args: &Args) {
    println!("{}", render(derive_age(&args.date_of_birth, today())));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_flags_only_rejected_dates() {
        assert_eq!(render(DerivedAge::Unknown), "Age");
        assert_eq!(render(DerivedAge::Years(30)), "30 years");
        assert_eq!(
            render(DerivedAge::Invalid),
            "N/A (not a valid past date, expected YYYY-MM-DD)"
        );
    }
}
