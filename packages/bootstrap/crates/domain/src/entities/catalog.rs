/// Packages installed into every new project during the runtime phase.
pub const RUNTIME_DEPENDENCIES: &[&str] = &[
    "react",
    "react-dom",
    "@babel/polyfill",
    "@material-ui/core",
    "axios",
    "classnames",
    "copyfile",
    "cross-env",
    "fs",
    "moment",
    "notistack",
    "prop-types",
    "qs",
    "react-redux",
    "react-router",
    "react-router-dom",
    "react-transition-group",
    "redux",
    "redux-logger",
    "redux-promise-middleware",
    "redux-thunk",
    "showdown",
    "webpack",
    "webpack-cli",
    "webpack-dev-server",
    "webpack-merge",
];

/// Packages installed with `--dev` in the development phase.
pub const DEVELOPMENT_DEPENDENCIES: &[&str] = &[
    "@babel/cli",
    "@babel/core",
    "@babel/plugin-proposal-class-properties",
    "@babel/plugin-proposal-export-default-from",
    "@babel/plugin-transform-classes",
    "@babel/plugin-transform-object-set-prototype-of-to-assign",
    "@babel/preset-env",
    "@babel/preset-react",
    "@babel/runtime",
    "babel-eslint",
    "babel-loader",
    "braces",
    "css-loader",
    "deep-equal",
    "eslint",
    "eslint-config-airbnb",
    "eslint-plugin-import",
    "eslint-plugin-jsx-a11y",
    "eslint-plugin-react",
    "file-loader",
    "fs-plus",
    "ftp-deploy",
    "history",
    "immutability-helper",
    "jasmine",
    "karma",
    "karma-chrome-launcher",
    "karma-jasmine",
    "karma-junit-reporter",
    "karma-sourcemap-loader",
    "karma-webpack",
    "puppeteer",
    "renamer",
    "replace-in-file",
    "rimraf",
    "style-loader",
    "stylelint",
    "stylelint-config-standard",
    "url-loader",
    "yargs",
];

/// The two dependency tiers of a generated project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyCatalog {
    runtime: Vec<String>,
    development: Vec<String>,
}

impl DependencyCatalog {
    pub fn new(runtime: Vec<String>, development: Vec<String>) -> Self {
        Self {
            runtime,
            development,
        }
    }

    pub fn runtime(&self) -> &[String] {
        &self.runtime
    }

    pub fn development(&self) -> &[String] {
        &self.development
    }

    /// Every dependency name, sorted and deduplicated.
    /// A project may not share a name with any of these.
    pub fn reserved_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .runtime
            .iter()
            .chain(self.development.iter())
            .cloned()
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

impl Default for DependencyCatalog {
    fn default() -> Self {
        Self::new(
            RUNTIME_DEPENDENCIES.iter().map(|s| s.to_string()).collect(),
            DEVELOPMENT_DEPENDENCIES.iter().map(|s| s.to_string()).collect(),
        )
    }
}
