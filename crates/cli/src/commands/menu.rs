//! Menu listing.

use std::io::Write;
use std::path::Path;

use teztayor_storefront::Menu;

use super::CommandError;

/// Print every dish in `path` as `#id name - price currency`.
///
/// # Errors
///
/// Returns an error if the menu cannot be loaded or writing fails.
pub fn list(path: &Path, currency: &str, out: &mut impl Write) -> Result<(), CommandError> {
    let menu = Menu::from_path(path)?;
    for item in menu.items() {
        writeln!(out, "#{} {} - {} {currency}", item.id, item.name, item.price)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_list_menu() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "name": "Pizza", "price": 250, "img": "pizza.jpg"},
                {"id": 2, "name": "Samsa", "price": 12.5, "img": "samsa.jpg"}
            ]"#,
        )
        .unwrap();

        let mut out = Vec::new();
        list(&path, "somoni", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "#1 Pizza - 250 somoni\n#2 Samsa - 12.5 somoni\n"
        );
    }

    #[test]
    fn test_list_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let err = list(&dir.path().join("nope.json"), "somoni", &mut out).unwrap_err();
        assert!(matches!(err, CommandError::Catalog(_)));
    }
}
