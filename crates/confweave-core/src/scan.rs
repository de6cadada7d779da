//! Injection-point scanning.

use std::collections::BTreeSet;

use confweave_model::names;
use confweave_model::{ConfigPropertyRequest, TypeName};

use crate::classify::handled_by_producers;
use crate::emit::config_value_registration;
use crate::errors::BuildError;
use crate::pipeline::{BuildStage, ItemKind, PipelineContext};
use crate::property_name::derive_property_key;

/// Build stage walking every injection point of the resolved bean
/// graph and producing one [`ConfigPropertyRequest`] per point carrying
/// the configuration qualifier, plus one synthetic registration per
/// distinct requested type the generic producer cannot satisfy.
#[derive(Debug, Default)]
pub struct ScanInjectionPoints;

impl BuildStage for ScanInjectionPoints {
    fn name(&self) -> &'static str {
        "scan-injection-points"
    }

    fn produces(&self) -> &'static [ItemKind] {
        &[
            ItemKind::PropertyRequests,
            ItemKind::SyntheticRegistrations,
            ItemKind::ReflectiveHints,
        ]
    }

    fn consumes(&self) -> &'static [ItemKind] {
        &[]
    }

    fn run(&mut self, ctx: &mut PipelineContext<'_>) -> Result<(), BuildError> {
        let mut custom_shapes = BTreeSet::new();

        for point in ctx.index.injection_points() {
            // Defaulted qualifier means no configuration request.
            let Some(qualifier) = &point.qualifier else {
                continue;
            };

            let key = match qualifier.name.as_deref().filter(|n| !n.is_empty()) {
                Some(explicit) => explicit.to_string(),
                None => {
                    let member = point.site.member_name();
                    if member.is_empty() {
                        return Err(BuildError::MalformedInjectionPoint {
                            declaring_type: point.declaring_type.clone(),
                            site: point.site.clone(),
                        });
                    }
                    derive_property_key(member, &point.declaring_type, ctx.index)
                }
            };

            if !handled_by_producers(&point.ty) {
                custom_shapes.insert(point.ty.clone());
            }

            // A declared default counts only when it is non-empty or
            // the explicit unconfigured sentinel.
            let default_value = qualifier
                .default_value
                .as_deref()
                .filter(|v| *v == names::UNCONFIGURED_VALUE || !v.is_empty())
                .map(str::to_string);

            ctx.property_requests.push(ConfigPropertyRequest {
                key,
                ty: point.ty.clone(),
                default_value,
                declaring_type: point.declaring_type.clone(),
                member: point.site.member_name().to_string(),
            });
        }

        tracing::debug!(
            requests = ctx.property_requests.len(),
            custom_types = custom_shapes.len(),
            "scanned injection points"
        );

        for shape in custom_shapes {
            // Implicit converters load these by name; arrays go through
            // the fallback creator instead.
            if !shape.is_array() {
                ctx.reflection
                    .register(TypeName::new(shape.raw_name()), true, false);
            }
            ctx.registrations.push(config_value_registration(&shape));
        }

        Ok(())
    }
}
