use std::fmt::Display;

/// Values that may be missing or empty. Empty values never produce a row.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Presence for &str {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Presence for i32 {
    fn is_present(&self) -> bool {
        *self != 0
    }
}

impl Presence for i64 {
    fn is_present(&self) -> bool {
        *self != 0
    }
}

impl Presence for f64 {
    fn is_present(&self) -> bool {
        *self != 0.0 && self.is_finite()
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
enum Cell {
    Value(Option<String>),
    Flag(bool),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Row<'a> {
    Value { label: &'a str, value: &'a str },
    Flag { label: &'a str },
}

impl<'a> Row<'a> {
    pub fn label(&self) -> &'a str {
        match *self {
            Row::Value { label, .. } | Row::Flag { label } => label,
        }
    }
}

/// A titled panel of `(label, value)` and `(label, flag)` entries.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FeatureTable {
    title: String,
    entries: Vec<(&'static str, Cell)>,
}

impl FeatureTable {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn value<T: Presence + Display>(self, label: &'static str, value: Option<T>) -> Self {
        self.value_with(label, value, |v| v.to_string())
    }

    pub fn value_with<T: Presence>(
        mut self,
        label: &'static str,
        value: Option<T>,
        format: impl FnOnce(&T) -> String,
    ) -> Self {
        let text = value.filter(Presence::is_present).map(|v| format(&v));
        self.entries.push((label, Cell::Value(text)));
        self
    }

    pub fn flag(mut self, label: &'static str, on: bool) -> Self {
        self.entries.push((label, Cell::Flag(on)));
        self
    }

    /// Values first, then flags, each in declaration order. Absent values
    /// and unset flags are skipped.
    pub fn rows(&self) -> Vec<Row<'_>> {
        let (values, flags): (Vec<_>, Vec<_>) = self
            .entries
            .iter()
            .filter_map(|&(label, ref cell)| match cell {
                Cell::Value(Some(value)) => Some(Row::Value {
                    label,
                    value: value.as_str(),
                }),
                Cell::Flag(true) => Some(Row::Flag { label }),
                Cell::Value(None) | Cell::Flag(false) => None,
            })
            .partition(|row| matches!(row, Row::Value { .. }));

        values.into_iter().chain(flags).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falsy_entries_are_omitted() {
        let table = FeatureTable::new("Temel Özellikler")
            .value("Oda Sayısı", Some("3+1"))
            .value("Kat", Some(""))
            .value("Isıtma", None::<String>)
            .value("Banyo Sayısı", Some(0))
            .value_with("Net Alan", Some(0.0), |v| format!("{v} m²"))
            .flag("Asansör", true)
            .flag("Havuz", false);

        let labels: Vec<&str> = table.rows().iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["Oda Sayısı", "Asansör"]);
    }

    #[test]
    fn values_come_before_flags() {
        let table = FeatureTable::new("İç Özellikler")
            .flag("Parke", true)
            .value("Mutfak Tipi", Some("Açık"));

        assert_eq!(
            table.rows(),
            vec![
                Row::Value {
                    label: "Mutfak Tipi",
                    value: "Açık"
                },
                Row::Flag { label: "Parke" },
            ]
        );
    }

    #[test]
    fn formatter_sees_only_present_values() {
        let table = FeatureTable::new("Temel Özellikler")
            .value_with("Bina Yaşı", Some(12), |age| format!("{age} yıl"));

        assert_eq!(
            table.rows(),
            vec![Row::Value {
                label: "Bina Yaşı",
                value: "12 yıl"
            }]
        );
    }

    #[test]
    fn all_falsy_table_is_empty() {
        let table = FeatureTable::new("Dış Özellikler")
            .value("Cephe", Some("   "))
            .flag("Balkon", false);
        assert!(table.is_empty());
    }
}
