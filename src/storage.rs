//! ファイル保存のストア
//!
//! キー → 値 を1つのJSONファイルに保持し、書き込みのたびに全体を保存する。
//! 保存は同じディレクトリの一時ファイルに書いてから置き換える。

use shift_board_common::Storage;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// ストアファイルを開く
    ///
    /// 存在しなければ空。読めない内容なら警告して空から始める
    /// （次の書き込みで上書きされる）。
    pub fn open(path: impl Into<PathBuf>) -> shift_board_common::Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                items: BTreeMap::new(),
            });
        }

        let reader = BufReader::new(File::open(&path)?);
        let items = match serde_json::from_reader(reader) {
            Ok(items) => items,
            Err(e) => {
                eprintln!(
                    "⚠ ストアファイルが読めないため空で開始します ({}): {}",
                    path.display(),
                    e
                );
                BTreeMap::new()
            }
        };

        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) -> shift_board_common::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, &self.items)?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> shift_board_common::Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> shift_board_common::Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> shift_board_common::Result<()> {
        if self.items.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    /// まとめて反映し、ファイルは1回だけ書き込む
    fn apply(&mut self, changes: &[(&str, Option<&str>)]) -> shift_board_common::Result<()> {
        for (key, value) in changes {
            match value {
                Some(value) => {
                    self.items.insert(key.to_string(), value.to_string());
                }
                None => {
                    self.items.remove(*key);
                }
            }
        }
        self.persist()
    }
}
