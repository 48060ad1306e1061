use derive_new::new;

use crate::model::{
    id::SpaceId,
    price::Price,
    space::availability::{Availability, AvailabilityStatus},
};

#[derive(Debug, new)]
pub struct CreateSpace {
    pub space_type: String,
    pub media: Vec<String>,
    pub price: Price,
    pub description: Option<String>,
    pub pincode: Option<String>,
    pub google_maps_url: Option<String>,
    pub availability: Availability,
}

// 全項目の上書き。省略された項目も「渡された値」で更新する
#[derive(Debug)]
pub struct UpdateSpace {
    pub space_id: SpaceId,
    pub space_type: String,
    pub media: Vec<String>,
    pub price: Price,
    pub description: Option<String>,
    pub pincode: Option<String>,
    pub google_maps_url: Option<String>,
    pub availability: Availability,
}

#[derive(Debug)]
pub struct DeleteSpace {
    pub space_id: SpaceId,
}

/// 空き状況に対する一括操作
#[derive(Debug, Clone)]
pub enum AvailabilityChange {
    Add(Vec<String>),
    Remove(Vec<String>),
    Patch(Vec<(String, AvailabilityStatus)>),
}

impl AvailabilityChange {
    pub fn apply(self, availability: &mut Availability) {
        match self {
            AvailabilityChange::Add(dates) => availability.add_dates(dates),
            AvailabilityChange::Remove(dates) => availability.remove_dates(dates),
            AvailabilityChange::Patch(updates) => availability.patch(updates),
        }
    }
}

#[derive(Debug, new)]
pub struct UpdateAvailability {
    pub space_id: SpaceId,
    pub change: AvailabilityChange,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn changes_apply_in_sequence() {
        let mut availability = Availability::new();
        AvailabilityChange::Add(vec!["2024-07-01".into(), "2024-07-02".into()])
            .apply(&mut availability);
        AvailabilityChange::Patch(vec![("2024-07-02".into(), json!("maintenance"))])
            .apply(&mut availability);
        AvailabilityChange::Remove(vec!["2024-07-01".into()]).apply(&mut availability);

        assert_eq!(availability.len(), 1);
        assert_eq!(availability.get("2024-07-02"), Some(&json!("maintenance")));
    }
}
