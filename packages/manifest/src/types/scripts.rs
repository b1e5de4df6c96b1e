use std::collections::BTreeMap;

/// The named build/test/lint/deploy commands every generated project ships with.
///
/// Keys are kept in a `BTreeMap` so the serialized manifest is byte-stable
/// across runs.
pub fn default_scripts() -> BTreeMap<String, String> {
    let scripts = [
        (
            "lint",
            "cross-env eslint . --ext .js --ext .jsx  --ignore-path .gitignore --cache",
        ),
        (
            "test",
            "karma start --single-run=true --watch=false karma.conf.js",
        ),
        (
            "test:watch",
            "karma start --single-run=false --watch=true --browsers Chrome karma.conf.js",
        ),
        (
            "bundle:prod",
            "cross-env webpack --progress --config webpack.prod.js",
        ),
        (
            "bundle:stage",
            "cross-env webpack --progress --config webpack.stage.js",
        ),
        (
            "bundle:dev",
            "cross-env webpack --progress --config webpack.dev.js",
        ),
        (
            "bundle:local",
            "cross-env webpack --progress --config webpack.local.js",
        ),
        (
            "bundle:watch",
            "cross-env webpack --progress --config webpack.local.js --watch",
        ),
        ("bundle", "npm run bundle:prod"),
        ("clean", "rimraf dist/*"),
        (
            "start",
            "webpack-dev-server --inline --hot --config webpack.local.js",
        ),
        ("build", "npm run clean && npm run bundle && npm run package"),
        (
            "predeploy",
            "rimraf dist/web/prod/public && rimraf dist/web/prod/cloud",
        ),
        (
            "deploy",
            "npm run bundle:prod && cross-env copyfiles cloud/* cloud/models/* dist/web/prod && cross-env copyfiles img/* fonts/* css/* models/* landing/* renderer-bundle.js manifest.json index.html dist/web/prod/public",
        ),
        (
            "predeploy:edge",
            "rimraf dist/web/edge/public && rimraf dist/web/edge/cloud",
        ),
        (
            "deploy:edge",
            "npm run bundle:dev && cross-env copyfiles cloud/* cloud/models/* dist/web/edge && cross-env copyfiles img/* fonts/* css/* models/* landing/* renderer-bundle.js manifest.json  index.html dist/web/edge/public",
        ),
    ];

    scripts
        .into_iter()
        .map(|(name, command)| (name.to_string(), command.to_string()))
        .collect()
}
