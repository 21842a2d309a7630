use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub about: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub contacts: Vec<ContactLink>,
}

impl Default for Profile {
    fn default() -> Self {
        let skills = [
            "HTML", "CSS", "JavaScript", "Tailwind", "Python", "Git", "C", "C++", "React",
            "Node.js", "MongoDB", "MySQL", "Firebase", "Three.js",
        ];
        Self {
            name: "Vaibhav Kulshrestha".to_string(),
            about: "I'm a full-stack developer with a passion for creating innovative solutions. \
                    With expertise in both web development and Python programming, I love tackling \
                    complex problems and building user-friendly applications."
                .to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            achievements: vec![
                Achievement {
                    title: "Smart India Hackathon Winner".to_string(),
                    description: "Won the Smart India Hackathon in 2023, developing an innovative solution for [specific problem].".to_string(),
                },
                Achievement {
                    title: "Open Source Contributor".to_string(),
                    description: "Contributed to various open-source projects, including [Project Name] and [Project Name].".to_string(),
                },
                Achievement {
                    title: "Coding Competition Finalist".to_string(),
                    description: "Reached the finals of [Competition Name], competing against top developers from across the country.".to_string(),
                },
                Achievement {
                    title: "Tech Talk Speaker".to_string(),
                    description: "Delivered a tech talk on [Topic] at [Event Name], sharing insights with over 200 attendees.".to_string(),
                },
            ],
            contacts: vec![
                ContactLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/Vaibhavkulshrestha12".to_string(),
                },
                ContactLink {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/vaibhav-kulshrestha".to_string(),
                },
                ContactLink {
                    label: "Mail".to_string(),
                    url: "mailto:vaibhav@example.com".to_string(),
                },
            ],
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub owner: String,
    pub api_url: String,
    #[serde(default = "default_featured_repos")]
    pub featured_repos: Vec<String>,
    pub github_token: Option<String>,
    #[serde(default)]
    pub profile: Profile,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("owner", &self.owner)
            .field("api_url", &self.api_url)
            .field("featured_repos", &self.featured_repos)
            .field("github_token", &self.github_token.as_ref().map(|_| "[REDACTED]"))
            .field("profile", &self.profile.name)
            .finish()
    }
}

fn default_featured_repos() -> Vec<String> {
    vec!["FlapPyBird".to_string(), "superman-pygame".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: "Vaibhavkulshrestha12".to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            featured_repos: default_featured_repos(),
            github_token: None,
            profile: Profile::default(),
        }
    }
}

/// Values given on the command line; they win over every other source.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub owner: Option<String>,
    pub api_url: Option<String>,
    pub repos: Vec<String>,
}

impl Config {
    pub fn load(overrides: Overrides) -> Self {
        Self::load_from(&config_file(), overrides)
    }

    pub fn load_from(config_file: &Path, overrides: Overrides) -> Self {
        let file = config_file.exists().then_some(config_file);

        let mut config: Config = match layered(file, &overrides).extract() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("config parse error, ignoring {}: {e}", config_file.display());
                match layered(None, &overrides).extract() {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::warn!("config parse error, using defaults: {e}");
                        Config::default()
                    }
                }
            }
        };

        config.featured_repos.retain(|r| !r.trim().is_empty());
        if config.featured_repos.is_empty() {
            tracing::warn!("no featured repositories configured, using defaults");
            config.featured_repos = default_featured_repos();
        }
        config
    }

    pub fn to_toml(&self) -> crate::error::Result<String> {
        let mut shown = self.clone();
        if shown.github_token.is_some() {
            shown.github_token = Some("[REDACTED]".to_string());
        }
        toml::to_string_pretty(&shown).map_err(|e| crate::error::FolioError::Config(e.to_string()))
    }
}

/// Defaults, then the optional file, then environment, then CLI.
fn layered(config_file: Option<&Path>, overrides: &Overrides) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if let Some(path) = config_file {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("FOLIO_").ignore(&["LOG"])).merge(
        Env::raw()
            .only(&["GITHUB_TOKEN"])
            .map(|_| "github_token".into()),
    );

    if let Some(owner) = &overrides.owner {
        figment = figment.merge(Serialized::default("owner", owner));
    }
    if let Some(url) = &overrides.api_url {
        figment = figment.merge(Serialized::default("api_url", url));
    }
    if !overrides.repos.is_empty() {
        figment = figment.merge(Serialized::default("featured_repos", &overrides.repos));
    }
    figment
}

pub fn config_file() -> PathBuf {
    config_dir().join("folio").join("config.toml")
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
