use serde::Deserialize;
use serde_json::Value;

/// One row record: column name mapped to a JSON scalar. Key order follows the
/// API's header order (`serde_json` is built with `preserve_order`).
pub type Row = serde_json::Map<String, Value>;

/// Raw wire shape of a stats.nba.com response.
///
/// Every stats endpoint answers with the same envelope: the resource name, an
/// echo of the request parameters, and one or more result sets given as a
/// header list plus positional rows.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub parameters: Value,
    pub result_sets: Vec<RawResultSet>,
}

/// A single named result set as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResultSet {
    pub name: String,
    pub headers: Vec<String>,
    pub row_set: Vec<Vec<Value>>,
}

/// Processed API response: an ordered mapping from result-set name to its row
/// records, with each positional row zipped against the header list.
///
/// Rows shorter than the header list simply omit the trailing keys; the
/// export stage treats missing keys as empty cells.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    sets: Vec<(String, Vec<Row>)>,
}

impl ResultSet {
    /// Returns the rows of the named result set, or `None` if the response
    /// did not carry a set with that name.
    pub fn rows(&self, name: &str) -> Option<&[Row]> {
        self.sets
            .iter()
            .find(|(set_name, _)| set_name == name)
            .map(|(_, rows)| rows.as_slice())
    }

    /// Result-set names in the order they were received.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(|(name, _)| name.as_str())
    }
}

impl From<StatsResponse> for ResultSet {
    fn from(response: StatsResponse) -> Self {
        let sets = response
            .result_sets
            .into_iter()
            .map(|set| {
                let rows = set
                    .row_set
                    .into_iter()
                    .map(|values| set.headers.iter().cloned().zip(values).collect::<Row>())
                    .collect();
                (set.name, rows)
            })
            .collect();
        ResultSet { sets }
    }
}
