use store::{KeyValueStore, Resource, ResourceFilter, ResourceRepository, StoreError};

/// Page state for the resource list view.
///
/// Held as a `Signal<ResourceList>` by `ResourcesView`. The
/// `resources` vector is the single source of truth for the page and is saved
/// whole after every change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceList {
    pub resources: Vec<Resource>,
    /// Set once the initial load finished, successfully or not.
    pub loaded: bool,
    pub dialog_open: bool,
    pub filter_open: bool,
    pub filter: ResourceFilter,
    /// Last storage failure, shown as a banner.
    pub error: Option<String>,
}

impl ResourceList {
    /// Load the collection from `repo`.
    pub async fn refresh_from<S: KeyValueStore>(repo: &ResourceRepository<S>) -> Self {
        Self::from_load(repo.load().await)
    }

    /// Initial state from the outcome of a repository load.
    pub fn from_load(result: Result<Vec<Resource>, StoreError>) -> Self {
        match result {
            Ok(resources) => ResourceList {
                resources,
                loaded: true,
                ..Default::default()
            },
            Err(e) => {
                tracing::error!("Failed to load resources: {}", e);
                ResourceList {
                    loaded: true,
                    error: Some(format!("Could not load saved resources: {e}")),
                    ..Default::default()
                }
            }
        }
    }

    /// Append a newly created resource and close the creation dialog.
    pub fn add(&mut self, resource: Resource) {
        tracing::info!(id = %resource.id, name = %resource.name, "resource added");
        self.resources.push(resource);
        self.dialog_open = false;
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    pub fn toggle_filter(&mut self) {
        self.filter_open = !self.filter_open;
    }

    /// Resources passing the current filter, in insertion order.
    pub fn visible(&self) -> Vec<Resource> {
        self.filter
            .apply(&self.resources)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Save `resources` to `repo`, returning the banner message on failure.
    pub async fn save_to<S: KeyValueStore>(
        repo: &ResourceRepository<S>,
        resources: &[Resource],
    ) -> Option<String> {
        match repo.save(resources).await {
            Ok(()) => None,
            Err(e) => {
                tracing::error!("Failed to save resources: {}", e);
                Some(format!("Could not save resources: {e}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStore, ResourceDraft, ResourceStatus, ResourceType, SequentialIds};

    /// Reads nothing and rejects every write.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        async fn get(&self, _key: &str) -> store::error::Result<Option<String>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: String) -> store::error::Result<()> {
            Err(StoreError::Unavailable("quota exceeded".to_string()))
        }

        async fn remove(&self, _key: &str) -> store::error::Result<()> {
            Ok(())
        }
    }

    fn water_bottles(ids: &SequentialIds) -> Resource {
        ResourceDraft {
            name: "Water Bottles".to_string(),
            r#type: ResourceType::Food,
            quantity: 500.0,
            unit: "bottles".to_string(),
            status: ResourceStatus::Available,
            conditions: "clean, sealed".to_string(),
            ..ResourceDraft::default()
        }
        .into_resource(ids, chrono::Utc::now())
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let list = ResourceList::default();
        assert!(list.resources.is_empty());
        assert!(!list.loaded);
        assert!(!list.dialog_open);
        assert!(!list.filter.is_active());
        assert!(list.error.is_none());
    }

    #[test]
    fn test_add_appends_and_closes_dialog() {
        let ids = SequentialIds::new();
        let mut list = ResourceList::from_load(Ok(Vec::new()));
        list.open_dialog();
        assert!(list.dialog_open);

        list.add(water_bottles(&ids));

        assert_eq!(list.resources.len(), 1);
        assert!(!list.dialog_open);
        assert_eq!(list.resources[0].name, "Water Bottles");
        assert_eq!(list.resources[0].status.label(), "Available");
        assert_eq!(
            list.resources[0].condition_tags(),
            ["clean".to_string(), "sealed".to_string()]
        );

        list.open_dialog();
        list.add(water_bottles(&ids));
        assert_eq!(list.resources.len(), 2);
        assert_eq!(list.resources[1].id, "2");
    }

    #[test]
    fn test_from_load_error_starts_empty() {
        let source = serde_json::from_str::<Vec<Resource>>("{").unwrap_err();
        let list = ResourceList::from_load(Err(StoreError::Malformed {
            key: "resources".to_string(),
            source,
        }));
        assert!(list.loaded);
        assert!(list.resources.is_empty());
        assert!(list.error.unwrap().starts_with("Could not load saved resources"));
    }

    #[test]
    fn test_visible_applies_filter() {
        let ids = SequentialIds::new();
        let mut depleted = water_bottles(&ids);
        depleted.status = ResourceStatus::Depleted;
        let available = water_bottles(&ids);

        let mut list = ResourceList::from_load(Ok(vec![depleted, available]));
        assert_eq!(list.visible().len(), 2);

        list.toggle_filter();
        assert!(list.filter_open);
        list.filter.status = Some(ResourceStatus::Available);
        let visible = list.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
        // the filter never touches the stored collection
        assert_eq!(list.resources.len(), 2);
    }

    #[tokio::test]
    async fn test_added_resources_survive_reload() {
        let store = MemoryStore::new();
        let repo = ResourceRepository::new(store.clone());
        let ids = SequentialIds::new();

        let mut list = ResourceList::refresh_from(&repo).await;
        assert!(list.loaded);
        assert!(list.resources.is_empty());

        for name in ["Rice", "Tents", "Insulin"] {
            let mut resource = water_bottles(&ids);
            resource.name = name.to_string();
            list.open_dialog();
            list.add(resource);
            list.error = ResourceList::save_to(&repo, &list.resources).await;
            assert!(list.error.is_none());
        }

        let reloaded = ResourceList::refresh_from(&ResourceRepository::new(store)).await;
        let names: Vec<_> = reloaded.resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Rice", "Tents", "Insulin"]);
        assert_eq!(reloaded.resources, list.resources);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_list_and_sets_error() {
        let ids = SequentialIds::new();
        let repo = ResourceRepository::new(ReadOnlyStore);

        let mut list = ResourceList::refresh_from(&repo).await;
        list.add(water_bottles(&ids));
        list.error = ResourceList::save_to(&repo, &list.resources).await;

        assert_eq!(list.resources.len(), 1);
        assert!(!list.dialog_open);
        let message = list.error.expect("save failure should set the banner");
        assert!(message.starts_with("Could not save resources"));
        assert!(message.contains("quota exceeded"));
    }
}
