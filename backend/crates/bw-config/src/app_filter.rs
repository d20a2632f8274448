/// Names of the apps to serve, as given on the command line.
///
/// Accepts a comma or semicolon separated list; blank entries are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppFilter {
    names: Vec<String>,
}

impl AppFilter {
    pub fn parse(list: &str) -> Self {
        let names = list
            .split([',', ';'])
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();

        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn matches(&self, app_name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(app_name))
    }
}
