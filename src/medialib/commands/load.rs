use crate::codec::FileImport;
use crate::collection::Collection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MediaError, Result};

/// Loads each catalog in turn. A catalog that cannot be read is reported and
/// skipped; the others still load.
pub fn run<C: FileImport, S: AsRef<str>>(
    collection: &mut Collection<C>,
    paths: &[S],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for path in paths {
        let path = path.as_ref();
        let before = collection.len();

        match collection.load(path) {
            Ok(count) => {
                result.add_message(CmdMessage::success(format!(
                    "Loaded {} files from {}",
                    count, path
                )));
            }
            Err(MediaError::ValidationFailed(failures)) => {
                let added = collection.len() - before;
                result.add_message(CmdMessage::warning(format!(
                    "Loaded {} files from {}; {} records rejected:",
                    added,
                    path,
                    failures.len()
                )));
                for (fullpath, errors) in failures {
                    let reasons: Vec<String> = errors.iter().map(ToString::to_string).collect();
                    result.add_message(CmdMessage::warning(format!(
                        "  {}: {}",
                        fullpath,
                        reasons.join(", ")
                    )));
                }
            }
            Err(e) => {
                result.add_message(CmdMessage::error(format!("Failed to load {}: {}", path, e)));
            }
        }
    }

    result.add_message(CmdMessage::info(collection.to_string()));
    Ok(result)
}
