//! Numbered text menus
//!
//! Options are an ordered list of label and tag pairs; the caller matches on
//! the returned tag.

/// A single menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption<T> {
    pub label: String,
    pub tag: T,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu<T> {
    title: String,
    options: Vec<MenuOption<T>>,
}

impl<T: Clone> Menu<T> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            options: Vec::new(),
        }
    }

    /// Builder-style append
    pub fn option(mut self, label: impl Into<String>, tag: T) -> Self {
        self.push(label, tag);
        self
    }

    pub fn push(&mut self, label: impl Into<String>, tag: T) {
        self.options.push(MenuOption {
            label: label.into(),
            tag,
        });
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[MenuOption<T>] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Resolve user input by 1-based number or case-insensitive label
    pub fn resolve(&self, input: &str) -> Option<T> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        if let Ok(number) = input.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|index| self.options.get(index))
                .map(|option| option.tag.clone());
        }
        self.options
            .iter()
            .find(|option| option.label.eq_ignore_ascii_case(input))
            .map(|option| option.tag.clone())
    }

    /// Boxed menu text, ready to print
    pub fn render(&self) -> String {
        let lines: Vec<String> = self
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| format!("{}. {}", index + 1, option.label))
            .collect();
        let width = lines
            .iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once(self.title.chars().count()))
            .max()
            .unwrap_or(0)
            + 4;

        let border = format!("+{}+", "-".repeat(width));
        let mut out = Vec::with_capacity(lines.len() + 4);
        out.push(border.clone());
        out.push(format!("|  {:<w$}|", self.title, w = width - 2));
        out.push(border.clone());
        for line in lines {
            out.push(format!("|  {:<w$}|", line, w = width - 2));
        }
        out.push(border);
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Pick {
        Attack,
        Defend,
    }

    fn menu() -> Menu<Pick> {
        Menu::new("Choose an Action")
            .option("Attack", Pick::Attack)
            .option("Defend", Pick::Defend)
    }

    #[test]
    fn test_resolve_by_number_and_label() {
        let menu = menu();
        assert_eq!(menu.resolve("1"), Some(Pick::Attack));
        assert_eq!(menu.resolve(" 2 "), Some(Pick::Defend));
        assert_eq!(menu.resolve("defend"), Some(Pick::Defend));
    }

    #[test]
    fn test_resolve_rejects_garbage() {
        let menu = menu();
        assert_eq!(menu.resolve("0"), None);
        assert_eq!(menu.resolve("3"), None);
        assert_eq!(menu.resolve(""), None);
        assert_eq!(menu.resolve("flee"), None);
    }

    #[test]
    fn test_render_numbers_options() {
        let text = menu().render();
        assert!(text.contains("Choose an Action"));
        assert!(text.contains("1. Attack"));
        assert!(text.contains("2. Defend"));
    }
}
