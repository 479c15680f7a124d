//! Hardware information collection (CPU, memory)

use crate::data::{CpuDescriptor, MemoryStats};
use crate::error::{FetchError, Result};
use crate::utils::file::read_file_safe;
use crate::utils::parsing::{extract_after_colon, kb_to_bytes};

const CPUINFO_PATH: &str = "/proc/cpuinfo";
const MEMINFO_PATH: &str = "/proc/meminfo";

/// Keys holding the model name, in order of preference.
/// x86 uses `model name`, MIPS `cpu model`, ARM boards `Model` or `Hardware`.
const MODEL_KEYS: [&str; 4] = ["model name", "cpu model", "Model", "Hardware"];

/// One descriptor per logical CPU listed in `/proc/cpuinfo`
pub fn cpu_info() -> Result<Vec<CpuDescriptor>> {
    Ok(parse_cpuinfo(&read_file_safe(CPUINFO_PATH)?))
}

/// Split cpuinfo into `processor` blocks and pick each block's model name.
///
/// Keys that appear outside any block (ARM puts `Hardware` at the end) are
/// used for blocks that carry no model of their own.
pub fn parse_cpuinfo(content: &str) -> Vec<CpuDescriptor> {
    let mut blocks: Vec<Vec<(String, String)>> = Vec::new();
    let mut trailing: Vec<(String, String)> = Vec::new();
    let mut in_block = false;

    for line in content.lines() {
        if line.trim().is_empty() {
            in_block = false;
            continue;
        }
        let Some((key, _)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_string();
        let value = extract_after_colon(line).unwrap_or_default();

        if key == "processor" {
            blocks.push(Vec::new());
            in_block = true;
        } else if in_block {
            if let Some(block) = blocks.last_mut() {
                block.push((key, value));
            }
        } else {
            trailing.push((key, value));
        }
    }

    let fallback = model_from(&trailing);
    blocks
        .iter()
        .map(|block| CpuDescriptor {
            model_name: model_from(block)
                .or_else(|| fallback.clone())
                .unwrap_or_default(),
        })
        .collect()
}

fn model_from(fields: &[(String, String)]) -> Option<String> {
    MODEL_KEYS.iter().find_map(|wanted| {
        fields
            .iter()
            .find(|(key, value)| key == wanted && !value.is_empty())
            .map(|(_, value)| value.clone())
    })
}

/// Used, total and free memory in bytes
pub fn virtual_memory() -> Result<MemoryStats> {
    parse_meminfo(&read_file_safe(MEMINFO_PATH)?)
}

/// Compute memory counters from `/proc/meminfo`.
///
/// Used memory excludes buffers and page cache (including reclaimable slab),
/// so it reflects what applications actually hold.
pub fn parse_meminfo(content: &str) -> Result<MemoryStats> {
    let mut total = None;
    let mut free = None;
    let mut buffers = 0;
    let mut cached = 0;
    let mut reclaimable = 0;

    for line in content.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        match key.trim() {
            "MemTotal" => total = Some(kb_to_bytes(value)?),
            "MemFree" => free = Some(kb_to_bytes(value)?),
            "Buffers" => buffers = kb_to_bytes(value)?,
            "Cached" => cached = kb_to_bytes(value)?,
            "SReclaimable" => reclaimable = kb_to_bytes(value)?,
            _ => {}
        }
    }

    let total = total.ok_or_else(|| FetchError::Parse("MemTotal not found".to_string()))?;
    let free = free.ok_or_else(|| FetchError::Parse("MemFree not found".to_string()))?;
    let used = total
        .saturating_sub(free)
        .saturating_sub(buffers)
        .saturating_sub(cached.saturating_add(reclaimable));

    Ok(MemoryStats { used, total, free })
}

#[cfg(test)]
mod tests {
    use super::*;

    const X86_CPUINFO: &str = "processor\t: 0
vendor_id\t: AuthenticAMD
model name\t: AMD Ryzen 7 5800X 8-Core Processor
cpu MHz\t\t: 3800.000

processor\t: 1
vendor_id\t: AuthenticAMD
model name\t: AMD Ryzen 7 5800X 8-Core Processor
cpu MHz\t\t: 3800.000
";

    const ARM_CPUINFO: &str = "processor\t: 0
BogoMIPS\t: 108.00
CPU part\t: 0xd08

processor\t: 1
BogoMIPS\t: 108.00
CPU part\t: 0xd08

Hardware\t: BCM2835
Model\t\t: Raspberry Pi 4 Model B Rev 1.4
";

    const MEMINFO: &str = "MemTotal:       16318032 kB
MemFree:         1024000 kB
MemAvailable:    9000000 kB
Buffers:          512000 kB
Cached:          4096000 kB
SwapCached:            0 kB
SReclaimable:     256000 kB
";

    #[test]
    fn test_parse_cpuinfo_x86() {
        let cpus = parse_cpuinfo(X86_CPUINFO);
        assert_eq!(cpus.len(), 2);
        assert_eq!(cpus[0].model_name, "AMD Ryzen 7 5800X 8-Core Processor");
    }

    #[test]
    fn test_parse_cpuinfo_arm_uses_trailing_model() {
        let cpus = parse_cpuinfo(ARM_CPUINFO);
        assert_eq!(cpus.len(), 2);
        assert_eq!(cpus[1].model_name, "Raspberry Pi 4 Model B Rev 1.4");
    }

    #[test]
    fn test_parse_cpuinfo_empty() {
        assert!(parse_cpuinfo("").is_empty());
    }

    #[test]
    fn test_parse_meminfo() {
        let stats = parse_meminfo(MEMINFO).unwrap();
        assert_eq!(stats.total, 16_318_032 * 1024);
        assert_eq!(stats.free, 1_024_000 * 1024);
        assert_eq!(
            stats.used,
            (16_318_032 - 1_024_000 - 512_000 - 4_096_000 - 256_000) * 1024
        );
    }

    #[test]
    fn test_parse_meminfo_saturates() {
        let stats = parse_meminfo("MemTotal: 100 kB\nMemFree: 90 kB\nCached: 50 kB\n").unwrap();
        assert_eq!(stats.used, 0);
    }

    #[test]
    fn test_parse_meminfo_missing_total() {
        let err = parse_meminfo("MemFree: 90 kB\n").unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }
}
