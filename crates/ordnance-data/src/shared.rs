//! Collaborators shared by every vehicle-family loader: tech level, fluff
//! text, manual battle value, transport bays and equipment attachment.

use ordnance_core::equipment::{EquipmentCatalog, Mounted};
use ordnance_core::family::VehicleFamily;
use ordnance_core::location::Location;
use ordnance_core::tech::TechLevel;
use ordnance_core::transport::{TransportBay, TransportKind};
use ordnance_core::vehicle::{Fluff, Vehicle};
use tracing::{debug, warn};

use crate::block::AttributedBlock;
use crate::error::{CollaboratorError, LoadError};

/// Narrow an integer field value, reporting the field on overflow.
pub(crate) fn to_i32(field: &str, value: i64) -> Result<i32, LoadError> {
    i32::try_from(value).map_err(|_| LoadError::OutOfRange {
        field: field.to_string(),
        value,
    })
}

// ===========================================================================
// Tech level, fluff, manual BV
// ===========================================================================

/// Resolve `type` (tech base and rules level) and `year`.
pub fn set_tech_level(block: &AttributedBlock, vehicle: &mut Vehicle) -> Result<(), LoadError> {
    let mut level = match block.first_string("type")? {
        Some(value) => {
            TechLevel::parse(value).ok_or_else(|| CollaboratorError::UnknownTechLevel {
                value: value.to_string(),
            })?
        }
        None => TechLevel::default(),
    };
    level.year = block
        .first_int("year")?
        .map(|year| to_i32("year", year))
        .transpose()?;
    vehicle.tech_level = level;
    Ok(())
}

fn joined_text(block: &AttributedBlock, name: &str) -> Result<Option<String>, LoadError> {
    if !block.exists(name) {
        return Ok(None);
    }
    let lines = block.string_values(name)?;
    Ok((!lines.is_empty()).then(|| lines.join("\n")))
}

pub fn set_fluff(block: &AttributedBlock, vehicle: &mut Vehicle) -> Result<(), LoadError> {
    vehicle.fluff = Fluff {
        overview: joined_text(block, "overview")?,
        capabilities: joined_text(block, "capabilities")?,
        deployment: joined_text(block, "deployment")?,
        history: joined_text(block, "history")?,
        manufacturer: joined_text(block, "manufacturer")?,
        primary_factory: joined_text(block, "primaryFactory")?,
        notes: joined_text(block, "notes")?,
    };
    Ok(())
}

/// A `bv` field overrides the computed battle value.
pub fn check_manual_bv(block: &AttributedBlock, vehicle: &mut Vehicle) -> Result<(), LoadError> {
    vehicle.manual_bv = block
        .first_int("bv")?
        .map(|bv| to_i32("bv", bv))
        .transpose()?;
    Ok(())
}

// ===========================================================================
// Transports
// ===========================================================================

/// Parse one `kind:capacity[:doors]` entry. Unknown kinds yield `Ok(None)`.
fn parse_transport(entry: &str) -> Result<Option<TransportBay>, CollaboratorError> {
    let malformed = |reason: String| CollaboratorError::MalformedTransport {
        entry: entry.to_string(),
        reason,
    };

    let mut parts = entry.split(':').map(str::trim);
    let key = parts.next().unwrap_or_default();
    let Some(kind) = TransportKind::from_key(key) else {
        return Ok(None);
    };

    let capacity = parts
        .next()
        .ok_or_else(|| malformed("missing capacity".to_string()))?;
    let capacity: f64 = capacity
        .parse()
        .map_err(|_| malformed(format!("bad capacity '{capacity}'")))?;
    if !capacity.is_finite() || capacity < 0.0 {
        return Err(malformed(format!("bad capacity '{capacity}'")));
    }

    let doors = match parts.next() {
        Some(doors) => doors
            .parse()
            .map_err(|_| malformed(format!("bad door count '{doors}'")))?,
        None => 1,
    };

    Ok(Some(TransportBay {
        kind,
        capacity,
        doors,
    }))
}

/// Attach the bays declared in `transporters`.
pub fn add_transports(block: &AttributedBlock, vehicle: &mut Vehicle) -> Result<(), LoadError> {
    if !block.exists("transporters") {
        return Ok(());
    }
    for entry in block.string_values("transporters")? {
        match parse_transport(entry)? {
            Some(bay) => vehicle.transports.push(bay),
            None => warn!(entry = %entry, "skipping unknown transporter kind"),
        }
    }
    Ok(())
}

// ===========================================================================
// Equipment
// ===========================================================================

/// What equipment attachment needs besides the block and the vehicle.
#[derive(Clone, Copy)]
pub struct EquipmentContext<'a> {
    pub catalog: &'a dyn EquipmentCatalog,
    pub family: &'a dyn VehicleFamily,
    /// Fail on names missing from the catalog instead of recording them.
    pub strict: bool,
}

/// One parsed line of a `<Location> Equipment` field.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EquipmentEntry {
    pub name: String,
    pub rear: bool,
    pub omni_pod: bool,
    pub size: Option<f64>,
}

fn strip_markers<'t>(mut text: &'t str, rear: &mut bool, omni_pod: &mut bool) -> &'t str {
    loop {
        if let Some(rest) = text.strip_suffix("(R)") {
            *rear = true;
            text = rest.trim_end();
        } else if let Some(rest) = text.strip_suffix("(OMNI)") {
            *omni_pod = true;
            text = rest.trim_end();
        } else {
            return text;
        }
    }
}

pub(crate) fn parse_equipment_entry(
    location: Location,
    raw: &str,
) -> Result<EquipmentEntry, CollaboratorError> {
    let malformed = |reason: String| CollaboratorError::MalformedEquipment {
        location,
        entry: raw.to_string(),
        reason,
    };

    let mut rear = false;
    let mut omni_pod = false;
    let mut text = strip_markers(raw.trim(), &mut rear, &mut omni_pod);

    let mut size = None;
    if let Some(pos) = text.find(":SIZE:") {
        let value = text[pos + ":SIZE:".len()..].trim();
        let parsed: f64 = value
            .parse()
            .map_err(|_| malformed(format!("bad size '{value}'")))?;
        size = Some(parsed);
        text = strip_markers(text[..pos].trim_end(), &mut rear, &mut omni_pod);
    }

    if text.is_empty() {
        return Err(malformed("empty equipment name".to_string()));
    }

    Ok(EquipmentEntry {
        name: text.to_string(),
        rear,
        omni_pod,
        size,
    })
}

/// Attach everything listed under `<Location> Equipment`.
pub fn load_equipment(
    block: &AttributedBlock,
    vehicle: &mut Vehicle,
    ctx: EquipmentContext<'_>,
    location: Location,
) -> Result<(), LoadError> {
    let field = format!("{} Equipment", location.name());
    if !block.exists(&field) {
        return Ok(());
    }

    for raw in block.string_values(&field)? {
        if raw.trim().is_empty() {
            continue;
        }
        let entry = parse_equipment_entry(location, raw)?;

        let Some(equipment) = ctx.catalog.lookup(&entry.name) else {
            if ctx.strict {
                return Err(CollaboratorError::UnknownEquipment {
                    location,
                    name: entry.name,
                }
                .into());
            }
            warn!(%location, name = %entry.name, "unknown equipment recorded as failed");
            vehicle.failed_equipment.push(entry.name);
            continue;
        };

        let mut mounted = Mounted::new(equipment.clone(), location);
        mounted.rear_mounted = entry.rear;
        mounted.omni_pod = entry.omni_pod;
        mounted.size = entry.size;
        if equipment.is_vgl() {
            mounted.facing = Some(ctx.family.default_vgl_facing(location, entry.rear));
        }
        vehicle.mount(mounted).map_err(CollaboratorError::from)?;
        debug!(%location, name = %entry.name, "mounted equipment");
    }
    Ok(())
}
