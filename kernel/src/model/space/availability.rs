use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 日付ごとの状態。`true`/`false` のほか "blocked" などの任意の値を取りうる。
pub type AvailabilityStatus = serde_json::Value;

/// スペースの空き状況。`YYYY-MM-DD` 形式の日付文字列から状態へのマッピング。
///
/// 日付文字列は形式を検証せず、不透明なキーとして扱う。
/// ISO 形式であれば辞書順と日付順が一致するため、範囲検索は文字列比較で行う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability(BTreeMap<String, AvailabilityStatus>);

impl Availability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, date: &str) -> Option<&AvailabilityStatus> {
        self.0.get(date)
    }

    pub fn contains(&self, date: &str) -> bool {
        self.0.contains_key(date)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AvailabilityStatus)> {
        self.0.iter()
    }

    /// `[start, end]` に含まれる日付のエントリだけを返す。
    /// 片方の境界が指定されない場合、その側は制約なしとして扱う。
    pub fn range(&self, start: Option<&str>, end: Option<&str>) -> Availability {
        self.0
            .iter()
            .filter(|(date, _)| start.map_or(true, |start| date.as_str() >= start))
            .filter(|(date, _)| end.map_or(true, |end| date.as_str() <= end))
            .map(|(date, status)| (date.clone(), status.clone()))
            .collect()
    }

    /// 指定した日付をすべて「空きあり」(`true`) にする。既存の値は上書きする。
    pub fn add_dates<I, S>(&mut self, dates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for date in dates {
            self.0.insert(date.into(), AvailabilityStatus::Bool(true));
        }
    }

    /// 指定した日付のエントリを削除する。存在しない日付は無視する。
    pub fn remove_dates<I, S>(&mut self, dates: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for date in dates {
            self.0.remove(date.as_ref());
        }
    }

    /// 日付ごとの状態を上書き（または追加）する。`updates` に含まれない日付は変更しない。
    pub fn patch<I>(&mut self, updates: I)
    where
        I: IntoIterator<Item = (String, AvailabilityStatus)>,
    {
        self.0.extend(updates);
    }
}

impl From<BTreeMap<String, AvailabilityStatus>> for Availability {
    fn from(value: BTreeMap<String, AvailabilityStatus>) -> Self {
        Self(value)
    }
}

impl FromIterator<(String, AvailabilityStatus)> for Availability {
    fn from_iter<T: IntoIterator<Item = (String, AvailabilityStatus)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Availability {
    type Item = (String, AvailabilityStatus);
    type IntoIter = std::collections::btree_map::IntoIter<String, AvailabilityStatus>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn availability(value: serde_json::Value) -> Availability {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn range_filters_inclusive_bounds() {
        let m = availability(json!({
            "2024-01-01": true,
            "2024-01-15": true,
            "2024-01-31": false,
            "2024-02-01": true,
        }));
        assert_eq!(
            m.range(Some("2024-01-01"), Some("2024-01-31")),
            availability(json!({
                "2024-01-01": true,
                "2024-01-15": true,
                "2024-01-31": false,
            }))
        );
    }

    #[test]
    fn range_excludes_dates_after_end() {
        let m = availability(json!({ "2024-01-15": true, "2024-02-01": true }));
        assert_eq!(
            m.range(Some("2024-01-01"), Some("2024-01-31")),
            availability(json!({ "2024-01-15": true }))
        );
    }

    #[test]
    fn range_treats_missing_bound_as_unconstrained() {
        let m = availability(json!({ "2024-01-15": true, "2024-02-01": "blocked" }));
        assert_eq!(m.range(None, None), m);
        assert_eq!(
            m.range(Some("2024-02-01"), None),
            availability(json!({ "2024-02-01": "blocked" }))
        );
        assert_eq!(
            m.range(None, Some("2024-01-31")),
            availability(json!({ "2024-01-15": true }))
        );
    }

    #[test]
    fn range_on_empty_or_inverted_bounds_is_empty() {
        assert!(Availability::new()
            .range(Some("2024-01-01"), Some("2024-12-31"))
            .is_empty());
        let m = availability(json!({ "2024-01-15": true }));
        assert!(m.range(Some("2024-02-01"), Some("2024-01-01")).is_empty());
    }

    #[test]
    fn add_dates_overwrites_and_is_idempotent() {
        let mut m = availability(json!({ "2024-03-01": false, "2024-03-05": "blocked" }));
        m.add_dates(["2024-03-01", "2024-03-02", "2024-03-02"]);
        let once = m.clone();
        m.add_dates(["2024-03-01", "2024-03-02", "2024-03-02"]);
        assert_eq!(m, once);
        assert_eq!(
            m,
            availability(json!({
                "2024-03-01": true,
                "2024-03-02": true,
                "2024-03-05": "blocked",
            }))
        );
    }

    #[test]
    fn remove_after_add_drops_every_given_date() {
        let original = availability(json!({ "2024-04-01": true, "2024-04-09": false }));
        let dates = ["2024-04-01", "2024-04-02"];
        let mut m = original.clone();
        m.add_dates(dates);
        m.remove_dates(dates);
        for date in dates {
            assert!(!m.contains(date));
        }
        assert_eq!(m, availability(json!({ "2024-04-09": false })));
    }

    #[test]
    fn remove_ignores_absent_dates() {
        let mut m = availability(json!({ "2024-05-01": true }));
        m.remove_dates(["1999-01-01", "not-a-date"]);
        assert_eq!(m, availability(json!({ "2024-05-01": true })));
    }

    #[test]
    fn patch_inserts_and_overwrites_without_removing() {
        let mut m = Availability::new();
        m.patch([("2024-03-01".to_string(), json!("blocked"))]);
        assert_eq!(m, availability(json!({ "2024-03-01": "blocked" })));

        m.add_dates(["2024-03-02"]);
        m.patch(availability(json!({ "2024-03-02": false })));
        assert_eq!(
            m,
            availability(json!({ "2024-03-01": "blocked", "2024-03-02": false }))
        );
    }

    #[test]
    fn empty_inputs_leave_mapping_unchanged() {
        let original = availability(json!({ "2024-06-01": true }));
        let mut m = original.clone();
        m.add_dates(Vec::<String>::new());
        m.remove_dates(Vec::<String>::new());
        m.patch(Availability::new());
        assert_eq!(m, original);
    }

    #[test]
    fn malformed_dates_are_opaque_keys() {
        let mut m = Availability::new();
        m.add_dates(["tomorrow"]);
        assert_eq!(m.get("tomorrow"), Some(&json!(true)));
    }
}
