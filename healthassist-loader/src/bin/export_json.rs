use std::{env, error::Error};

use healthassist_db::source::RecordFiles;
use healthassist_loader::BatchLoader;
use healthassist_model::metrics::BfpMethod;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let [method, path] = args.as_slice() else {
        return Err("usage: export-json <bmi|USArmy> <file>".into());
    };
    let method: BfpMethod = method.parse()?;

    let files = RecordFiles::new(".");
    let roster = BatchLoader::new(&files).load(path, method)?;
    println!("{}", serde_json::to_string_pretty(roster.list())?);

    Ok(())
}
