use std::collections::BTreeMap;

/// The host's emission sink.
pub trait SourceOutput {
    fn add_source(&mut self, hint_name: &str, text: &str);
}

impl SourceOutput for BTreeMap<String, String> {
    fn add_source(&mut self, hint_name: &str, text: &str) {
        self.insert(hint_name.to_string(), text.to_string());
    }
}

impl SourceOutput for Vec<(String, String)> {
    fn add_source(&mut self, hint_name: &str, text: &str) {
        self.push((hint_name.to_string(), text.to_string()));
    }
}
