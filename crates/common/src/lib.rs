pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn health_ok_constructor_matches_literal() {
        assert_eq!(types::Health::ok(), types::Health { status: "ok" });
    }
}
