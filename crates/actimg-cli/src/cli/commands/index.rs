//! `actimg index` – print the activity index a snapshot produces.

use anyhow::Result;
use std::path::Path;

use actimg_core::activity_index::ActivityIndex;
use actimg_core::host::RequestContext;
use actimg_core::snapshot::CourseSnapshot;

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct IndexRow {
    pub id: i64,
    pub state: String,
    pub name: String,
    pub path: String,
}

/// Index rows sorted by path.
pub(crate) fn index_rows(snapshot: &CourseSnapshot) -> Result<Vec<IndexRow>> {
    let course_id = snapshot
        .resolve_course_context()
        .ok_or_else(|| anyhow::anyhow!("snapshot has no course_id; nothing to index"))?;

    let mut index = ActivityIndex::new();
    let mut rows: Vec<IndexRow> = index
        .get(course_id, snapshot.current_user_id(), snapshot)
        .iter()
        .map(|(path, record)| IndexRow {
            id: record.id,
            state: format!("{:?}", record.state()).to_lowercase(),
            name: record.name.clone(),
            path: path.clone(),
        })
        .collect();
    rows.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(rows)
}

pub fn run_index(snapshot_path: &Path, user: Option<i64>) -> Result<()> {
    let mut snapshot = CourseSnapshot::load(snapshot_path)?;
    if let Some(user) = user {
        snapshot = snapshot.with_user(user);
    }

    let rows = index_rows(&snapshot)?;
    if rows.is_empty() {
        println!("No viewable activities in snapshot.");
    } else {
        println!("{:<6} {:<12} {:<24} {}", "ID", "STATE", "NAME", "PATH");
        for r in rows {
            println!("{:<6} {:<12} {:<24} {}", r.id, r.state, r.name, r.path);
        }
    }
    Ok(())
}
