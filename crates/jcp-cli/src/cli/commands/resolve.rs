//! `jcp resolve <locator>...` – resolve locators and print the classpath.

use anyhow::Result;
use jcp_core::cache::ResolutionCache;
use jcp_core::config::JcpConfig;
use jcp_core::engine::CoursierEngine;
use jcp_core::repository::Repository;
use jcp_core::resolver::DependencyResolver;

pub fn run_resolve(
    cfg: &JcpConfig,
    locators: &[String],
    repo_refs: &[String],
    quiet: bool,
) -> Result<()> {
    let mut repositories = Vec::new();
    for reference in repo_refs {
        repositories.push(Repository::parse_reference(reference)?);
    }
    repositories.extend(cfg.config_repositories()?);

    let engine = CoursierEngine::new(cfg.local_repo_dir()?);
    let cache = ResolutionCache::new(cfg.dependency_cache_file()?);
    let resolver = DependencyResolver::new(engine, cache);

    let classpath = resolver.resolve_deps(locators, &repositories, !quiet)?;
    println!("{classpath}");
    Ok(())
}
