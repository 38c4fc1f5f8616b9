use crate::extractor::ManifestInfo;
use crate::source::SourceFile;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static ARTIFACT_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<artifactId>([^<]+)</artifactId>").unwrap());

static DEPENDENCY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<dependency>.*?<artifactId>([^<]+)</artifactId>.*?</dependency>").unwrap()
});

/// `pom.xml` summarizer.
///
/// Picks up the first `<artifactId>` in the file (for a module with a `<parent>` block this is
/// the parent's id, which is accepted) and the `<artifactId>` of every `<dependency>` block.
pub struct ManifestExtractor;

impl ManifestExtractor {
    pub fn extract(source: &SourceFile) -> ManifestInfo {
        debug!("Extracting manifest: {}", source.path.display());
        Self::extract_from(&source.content)
    }

    pub fn extract_from(content: &str) -> ManifestInfo {
        let artifact_id = ARTIFACT_ID_PATTERN
            .captures(content)
            .map(|cap| cap[1].trim().to_string());

        let dependencies: Vec<String> = DEPENDENCY_PATTERN
            .captures_iter(content)
            .map(|cap| cap[1].trim().to_string())
            .collect();

        debug!(
            "Manifest artifactId: {:?}, {} dependencies",
            artifact_id,
            dependencies.len()
        );

        ManifestInfo {
            artifact_id,
            dependencies,
        }
    }
}
