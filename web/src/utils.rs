/// Seed for a new game, drawn from `Math.random` one byte at a time.
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes(core::array::from_fn(|_| (256. * random()) as u8))
}

/// Label of the flip button, naming the side it will turn up.
pub(crate) const fn toggle_label(showing_letters: bool) -> &'static str {
    if showing_letters {
        "Show numbers"
    } else {
        "Show letters"
    }
}

pub(crate) fn format_countdown(seconds: u32) -> String {
    format!("Time left: {seconds} s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_label_names_the_other_side() {
        assert_eq!(toggle_label(true), "Show numbers");
        assert_eq!(toggle_label(false), "Show letters");
    }

    #[test]
    fn countdown_text() {
        assert_eq!(format_countdown(10), "Time left: 10 s");
    }
}
