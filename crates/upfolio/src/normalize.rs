//! Reshape the raw project list into the document the website reads.

use std::collections::HashSet;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::{PROFILE_URL, SOURCE};
use crate::models::{Portfolio, Project, RawProject, RawProjectList};

/// Insertion-ordered set of image URLs.
#[derive(Debug, Default)]
struct ImageSet {
    seen: HashSet<String>,
    urls: Vec<String>,
}

impl ImageSet {
    fn add(&mut self, url: Option<&str>) {
        let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
            return;
        };
        if self.seen.insert(url.to_string()) {
            self.urls.push(url.to_string());
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.urls
    }
}

/// All image URLs of a project, first occurrence wins.
///
/// Order: original thumbnail, thumbnail, then per attachment the large,
/// middle and small image followed by the generic link.
pub fn collect_images(project: &RawProject) -> Vec<String> {
    let mut images = ImageSet::default();
    images.add(project.thumbnail_original.as_deref());
    images.add(project.thumbnail.as_deref());
    for att in project.attachments.iter().flatten() {
        images.add(att.image_large.as_deref());
        images.add(att.image_middle.as_deref());
        images.add(att.image_small.as_deref());
        images.add(att.link.as_deref());
    }
    images.into_vec()
}

fn trimmed(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_string()
}

pub fn normalize_project(project: &RawProject) -> Project {
    Project {
        id: project.id.clone(),
        title: trimmed(project.title.as_deref()),
        description: trimmed(project.description.as_deref()),
        project_url: trimmed(project.project_url.as_deref()),
        images: collect_images(project),
    }
}

/// Normalize with `fetchedAt` set to the given instant.
pub fn normalize_at(raw: &RawProjectList, fetched_at: DateTime<Utc>) -> Portfolio {
    let projects: Vec<Project> = raw
        .projects
        .iter()
        .flatten()
        .map(normalize_project)
        .collect();
    Portfolio {
        source: SOURCE.to_string(),
        profile_url: PROFILE_URL.to_string(),
        fetched_at: fetched_at.to_rfc3339_opts(SecondsFormat::Micros, false),
        total_projects: raw.total_projects.unwrap_or(projects.len() as u64),
        projects,
    }
}

pub fn normalize(raw: &RawProjectList) -> Portfolio {
    normalize_at(raw, Utc::now())
}
