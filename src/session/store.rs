use std::collections::BTreeMap;

use log::info;
use once_cell::sync::OnceCell;
use parking_lot::{Mutex, RwLock};
use rand::Rng;
use rand::rngs::StdRng;

use crate::batch::{self, BatchReport};
use crate::common::types::{Kilobytes, PageNo};
use crate::error::{ConfigError, PreconditionError, Result, ValidationError};
use crate::memory::{layout, reference};
use crate::replacement::{self, Policy, SimulationTrace};
use crate::session::config::SessionConfig;
use crate::session::entry::{FileEntry, FileRequest, SegmentUsage};
use crate::session::profile::MemoryProfile;

/// Owns the memory profile and the registry of tracked files.
///
/// The profile can be set once. Registration replaces any entry with the same
/// name and never leaves a partial entry behind on failure.
pub struct Session {
    config: SessionConfig,
    profile: OnceCell<MemoryProfile>,
    files: RwLock<BTreeMap<String, FileEntry>>,
    rng: Mutex<StdRng>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let rng = config.reference_source.rng();
        Self {
            config,
            profile: OnceCell::new(),
            files: RwLock::new(BTreeMap::new()),
            rng: Mutex::new(rng),
        }
    }

    /// Fix the memory profile for this session.
    ///
    /// Repeating the call with the same values is accepted; different values
    /// are rejected once a profile is in place.
    pub fn set_memory_profile(
        &self,
        total_ram_kb: Kilobytes,
        page_size_kb: Kilobytes,
    ) -> std::result::Result<MemoryProfile, ConfigError> {
        let requested = MemoryProfile::new(total_ram_kb, page_size_kb)?;
        let current = *self.profile.get_or_init(|| {
            info!(
                "Memory profile set: Total RAM={}KB, Page Size={}KB",
                requested.total_ram_kb, requested.page_size_kb
            );
            requested
        });
        if current != requested {
            return Err(ConfigError::ProfileAlreadySet {
                current_ram: current.total_ram_kb,
                current_page: current.page_size_kb,
                requested_ram: requested.total_ram_kb,
                requested_page: requested.page_size_kb,
            });
        }
        Ok(current)
    }

    pub fn profile(&self) -> Option<MemoryProfile> {
        self.profile.get().copied()
    }

    fn require_profile(&self) -> std::result::Result<MemoryProfile, ConfigError> {
        self.profile().ok_or(ConfigError::ProfileNotSet)
    }

    /// Register a file with a reference string drawn from the session's
    /// own random source
    pub fn register_file(&self, request: FileRequest) -> Result<FileEntry> {
        let mut rng = self.rng.lock();
        self.register_file_with_rng(request, &mut *rng)
    }

    /// Register a file with a reference string drawn from `rng`
    pub fn register_file_with_rng<R: Rng + ?Sized>(
        &self,
        request: FileRequest,
        rng: &mut R,
    ) -> Result<FileEntry> {
        let (profile, name) = self.check_request(&request.name, request.size_kb, request.allocated_kb)?;
        let page_count = profile.pages(request.size_kb)?;

        // A file without pages has no valid references
        let reference_string = if page_count == 0 {
            Vec::new()
        } else {
            reference::generate(page_count, request.reference_length, rng)
        };

        Ok(self.store(FileEntry {
            name,
            size_kb: request.size_kb,
            allocated_kb: request.allocated_kb,
            page_count,
            reference_string,
        }))
    }

    /// Register a file with a caller-supplied reference string
    pub fn register_file_with_references(
        &self,
        name: &str,
        size_kb: Kilobytes,
        allocated_kb: Kilobytes,
        reference_string: Vec<PageNo>,
    ) -> Result<FileEntry> {
        let (profile, name) = self.check_request(name, size_kb, allocated_kb)?;
        let page_count = profile.pages(size_kb)?;
        replacement::check_references(page_count, &reference_string).map_err(|err| match err {
            PreconditionError::ReferenceOutOfRange {
                position,
                page,
                page_count,
            } => ValidationError::ReferenceOutOfRange {
                position,
                page,
                page_count,
            },
        })?;

        Ok(self.store(FileEntry {
            name,
            size_kb,
            allocated_kb,
            page_count,
            reference_string,
        }))
    }

    fn check_request(
        &self,
        name: &str,
        size_kb: Kilobytes,
        allocated_kb: Kilobytes,
    ) -> Result<(MemoryProfile, String)> {
        let profile = self.require_profile()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        layout::check_size("file size", size_kb)?;
        layout::check_size("allocated RAM", allocated_kb)?;
        Ok((profile, name.to_string()))
    }

    fn store(&self, entry: FileEntry) -> FileEntry {
        info!(
            "Added file '{}': Size={}KB, Alloc={}KB, Pages={}, RefString={:?}",
            entry.name, entry.size_kb, entry.allocated_kb, entry.page_count, entry.reference_string
        );
        self.files.write().insert(entry.name.clone(), entry.clone());
        entry
    }

    /// Snapshot of every registered file, in name order
    pub fn files(&self) -> Vec<FileEntry> {
        self.files.read().values().cloned().collect()
    }

    pub fn file(&self, name: &str) -> Option<FileEntry> {
        self.files.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }

    /// Required versus allocated size per file
    pub fn segments(&self) -> Vec<SegmentUsage> {
        self.files.read().values().map(SegmentUsage::from).collect()
    }

    /// Simulate every registered file under `policy`
    pub fn run_simulation(&self, policy: Policy) -> std::result::Result<BatchReport, ConfigError> {
        let profile = self.require_profile()?;
        let files = self.files.read();
        let report = if self.config.parallel_batch {
            batch::run_all_parallel(policy, &profile, &files)
        } else {
            batch::run_all(policy, &profile, &files)
        };
        Ok(report)
    }

    /// Run the batch once per policy
    pub fn compare_policies(&self) -> std::result::Result<BTreeMap<Policy, BatchReport>, ConfigError> {
        let mut reports = BTreeMap::new();
        for policy in Policy::ALL {
            reports.insert(policy, self.run_simulation(policy)?);
        }
        Ok(reports)
    }

    /// Step-by-step replay of one file under `policy`
    pub fn trace(&self, name: &str, policy: Policy) -> Result<SimulationTrace> {
        let profile = self.require_profile()?;
        let files = self.files.read();
        let entry = files
            .get(name)
            .ok_or_else(|| ValidationError::UnknownFile(name.to_string()))?;
        let frames = profile.frames(entry.allocated_kb)?;
        Ok(replacement::simulate_trace(
            policy,
            entry.page_count,
            &entry.reference_string,
            frames,
        )?)
    }
}
