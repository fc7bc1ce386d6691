use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Widget hint for a column. Choice widgets take priority over the data type
/// when generating values.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ShowType {
    Select,
    Radio,
    Checkbox,
    MultiSelect,
    Textarea,
    #[default]
    #[serde(other)]
    Other,
}

impl ShowType {
    /// Whether values for this widget must come from the column's options.
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            ShowType::Select | ShowType::Radio | ShowType::Checkbox | ShowType::MultiSelect
        )
    }
}

/// Storage type hint. Unrecognized tags are kept verbatim so they can be reported;
/// non-string tags (numbers, `null`) become `Other` with their JSON text.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(from = "Value", into = "String")]
pub enum DataType {
    Int,
    Float,
    Varchar,
    Datetime,
    Other(String),
}

impl Default for DataType {
    fn default() -> Self {
        DataType::Other(String::new())
    }
}

impl From<String> for DataType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "int" => DataType::Int,
            "float" => DataType::Float,
            "varchar" => DataType::Varchar,
            "datetime" => DataType::Datetime,
            _ => DataType::Other(tag),
        }
    }
}

impl From<Value> for DataType {
    fn from(tag: Value) -> Self {
        match tag {
            Value::String(tag) => DataType::from(tag),
            Value::Null => DataType::default(),
            other => DataType::Other(other.to_string()),
        }
    }
}

impl From<DataType> for String {
    fn from(data_type: DataType) -> Self {
        match data_type {
            DataType::Int => "int".to_string(),
            DataType::Float => "float".to_string(),
            DataType::Varchar => "varchar".to_string(),
            DataType::Datetime => "datetime".to_string(),
            DataType::Other(tag) => tag,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ColumnOption {
    pub key: Value,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    pub key: String,
    #[serde(default)]
    pub show_type: ShowType,
    #[serde(default)]
    pub data_type: DataType,
    #[serde(default)]
    pub options: Vec<ColumnOption>,
}

impl ColumnDescriptor {
    pub fn new(key: &str, show_type: ShowType, data_type: DataType) -> Self {
        Self {
            key: key.to_string(),
            show_type,
            data_type,
            options: Vec::new(),
        }
    }

    pub fn with_options<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Value>,
    {
        self.options = keys
            .into_iter()
            .map(|key| {
                let key = key.into();
                let label = match &key {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                ColumnOption { key, label }
            })
            .collect();
        self
    }
}

/// Ordered column list for one table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Schema {
    pub columns: Vec<ColumnDescriptor>,
}

impl Schema {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self { columns }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_column() {
        let json = r#"{
            "key": "tags",
            "showType": "multiSelect",
            "dataType": "varchar",
            "options": [{"key": "a", "label": "A"}, {"key": 2, "label": "Two"}]
        }"#;
        let column: ColumnDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(column.show_type, ShowType::MultiSelect);
        assert_eq!(column.data_type, DataType::Varchar);
        assert_eq!(column.options[1].key, Value::from(2));
    }

    #[test]
    fn test_unknown_tags() {
        let json = r#"{"key": "blob", "showType": "image", "dataType": "blob"}"#;
        let column: ColumnDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(column.show_type, ShowType::Other);
        assert_eq!(column.data_type, DataType::Other("blob".to_string()));
    }

    #[test]
    fn test_non_string_data_type_is_other() {
        let schema: Schema = serde_json::from_str(
            r#"[{"key": "a", "dataType": 3}, {"key": "b", "dataType": null}, {"key": "c", "dataType": "int"}]"#,
        )
        .unwrap();

        assert_eq!(schema.columns[0].data_type, DataType::Other("3".to_string()));
        assert_eq!(schema.columns[1].data_type, DataType::Other(String::new()));
        assert_eq!(schema.columns[2].data_type, DataType::Int);
    }

    #[test]
    fn test_missing_tags_default() {
        let column: ColumnDescriptor = serde_json::from_str(r#"{"key": "id"}"#).unwrap();

        assert_eq!(column.show_type, ShowType::Other);
        assert_eq!(column.data_type, DataType::Other(String::new()));
        assert!(column.options.is_empty());
    }

    #[test]
    fn test_schema_is_a_json_array() {
        let schema: Schema =
            serde_json::from_str(r#"[{"key": "id", "dataType": "int"}, {"key": "name"}]"#)
                .unwrap();

        assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["id", "name"]);
    }
}
