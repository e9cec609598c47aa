//! 保存データの読み書き
//!
//! ストレージ上の各キーを型付きで扱う。取り込み結果は毎回全体を上書きする。

use crate::error::Result;
use crate::storage::Storage;
use crate::types::MasterMap;

/// 永続化キー
pub mod keys {
    /// シリアライズ済み MasterMap
    pub const MASTER_MAP: &str = "googleSheetDataMap";
    pub const SHEET_TITLE: &str = "sheetTitle";
    /// 取り込み元（比較リンク用）
    pub const SOURCE_LINK: &str = "originalSheetLink";
    pub const SELECTED_EMPLOYEE: &str = "selectedEmployee";
    /// 雪の飾り（JSONの真偽値）
    pub const SNOWFLAKES: &str = "snowflakes";
}

/// `Storage` の上に載る型付きアクセサ
#[derive(Debug)]
pub struct ScheduleStore<S: Storage> {
    storage: S,
}

impl<S: Storage> ScheduleStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    /// 取り込み結果を保存（マップ・タイトル・取り込み元）
    pub fn save_import(&mut self, map: &MasterMap, title: &str, source_link: Option<&str>) -> Result<()> {
        let json = map.to_json()?;
        self.storage.apply(&[
            (keys::MASTER_MAP, Some(json.as_str())),
            (keys::SHEET_TITLE, Some(title)),
            (keys::SOURCE_LINK, source_link),
        ])
    }

    /// 保存済みマップ。未保存なら `None`、壊れていれば `StoredDataCorrupt`
    pub fn load_map(&self) -> Result<Option<MasterMap>> {
        match self.storage.get(keys::MASTER_MAP)? {
            Some(json) => MasterMap::from_json(&json).map(Some),
            None => Ok(None),
        }
    }

    pub fn title(&self) -> Result<Option<String>> {
        self.storage.get(keys::SHEET_TITLE)
    }

    pub fn source_link(&self) -> Result<Option<String>> {
        self.storage.get(keys::SOURCE_LINK)
    }

    pub fn clear_source_link(&mut self) -> Result<()> {
        self.storage.remove(keys::SOURCE_LINK)
    }

    pub fn remembered_employee(&self) -> Result<Option<String>> {
        Ok(self
            .storage
            .get(keys::SELECTED_EMPLOYEE)?
            .filter(|name| !name.is_empty()))
    }

    /// 選択中の社員を記憶。`None` や空文字ならキーを削除
    pub fn remember_employee(&mut self, employee: Option<&str>) -> Result<()> {
        match employee.filter(|name| !name.is_empty()) {
            Some(name) => self.storage.set(keys::SELECTED_EMPLOYEE, name),
            None => self.storage.remove(keys::SELECTED_EMPLOYEE),
        }
    }

    /// 雪の飾りが有効か（未設定・解釈不能なら有効）
    pub fn snowflakes_enabled(&self) -> Result<bool> {
        let enabled = self
            .storage
            .get(keys::SNOWFLAKES)?
            .and_then(|raw| serde_json::from_str::<bool>(&raw).ok())
            .unwrap_or(true);
        Ok(enabled)
    }

    /// 雪の飾りを反転し、反転後の値を返す
    pub fn toggle_snowflakes(&mut self) -> Result<bool> {
        let enabled = !self.snowflakes_enabled()?;
        self.storage.set(keys::SNOWFLAKES, &enabled.to_string())?;
        Ok(enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::storage::MemoryStorage;
    use crate::weekday::Weekday;

    fn sample_map() -> MasterMap {
        let mut map = MasterMap::new();
        map.set_entries("Alice", Weekday::Mon, vec!["9:00".into(), "10:00".into()]);
        map
    }

    #[test]
    fn test_save_and_load_import() {
        let mut store = ScheduleStore::new(MemoryStorage::new());
        let map = sample_map();

        store
            .save_import(&map, "Таблица от: 02.03.2026", Some("https://docs.google.com/spreadsheets/d/abc/edit"))
            .unwrap();

        assert_eq!(store.load_map().unwrap(), Some(map));
        assert_eq!(store.title().unwrap().as_deref(), Some("Таблица от: 02.03.2026"));
        assert_eq!(
            store.source_link().unwrap().as_deref(),
            Some("https://docs.google.com/spreadsheets/d/abc/edit")
        );
    }

    #[test]
    fn test_import_overwrites_previous_map() {
        let mut store = ScheduleStore::new(MemoryStorage::new());
        store.save_import(&sample_map(), "old", Some("old-link")).unwrap();

        let mut next = MasterMap::new();
        next.set_entries("Bob", Weekday::Fri, vec![]);
        store.save_import(&next, "new", None).unwrap();

        let loaded = store.load_map().unwrap().unwrap();
        assert!(!loaded.contains_employee("Alice"));
        assert!(loaded.contains_employee("Bob"));
        assert_eq!(store.source_link().unwrap(), None);
    }

    #[test]
    fn test_load_map_absent() {
        let store = ScheduleStore::new(MemoryStorage::new());
        assert_eq!(store.load_map().unwrap(), None);
    }

    #[test]
    fn test_load_map_corrupt() {
        let mut storage = MemoryStorage::new();
        storage.set(keys::MASTER_MAP, "{broken").unwrap();
        let store = ScheduleStore::new(storage);

        assert!(matches!(store.load_map(), Err(Error::StoredDataCorrupt(_))));
    }

    #[test]
    fn test_remember_employee() {
        let mut store = ScheduleStore::new(MemoryStorage::new());
        assert_eq!(store.remembered_employee().unwrap(), None);

        store.remember_employee(Some("Alice")).unwrap();
        assert_eq!(store.remembered_employee().unwrap().as_deref(), Some("Alice"));

        store.remember_employee(Some("")).unwrap();
        assert_eq!(store.remembered_employee().unwrap(), None);
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_clear_source_link_keeps_map() {
        let mut store = ScheduleStore::new(MemoryStorage::new());
        store.save_import(&sample_map(), "t", Some("link")).unwrap();

        store.clear_source_link().unwrap();
        assert_eq!(store.source_link().unwrap(), None);
        assert!(store.load_map().unwrap().is_some());
    }

    #[test]
    fn test_snowflakes_default_and_toggle() {
        let mut store = ScheduleStore::new(MemoryStorage::new());
        assert!(store.snowflakes_enabled().unwrap());

        assert!(!store.toggle_snowflakes().unwrap());
        assert!(!store.snowflakes_enabled().unwrap());
        assert_eq!(store.storage().get(keys::SNOWFLAKES).unwrap().as_deref(), Some("false"));

        assert!(store.toggle_snowflakes().unwrap());
        assert!(store.snowflakes_enabled().unwrap());
    }

    #[test]
    fn test_snowflakes_unparsable_is_enabled() {
        let mut storage = MemoryStorage::new();
        storage.set(keys::SNOWFLAKES, "maybe").unwrap();
        let store = ScheduleStore::new(storage);
        assert!(store.snowflakes_enabled().unwrap());
    }
}
