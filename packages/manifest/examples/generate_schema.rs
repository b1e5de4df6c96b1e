use proem_manifest::PackageManifest;
use schemars::schema_for;

fn main() {
    let schema = schema_for!(PackageManifest);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}
