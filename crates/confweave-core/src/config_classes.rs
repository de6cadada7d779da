//! Configuration-class discovery, generation and registration.

use confweave_index::{collect_provided_types, DeclarationKind, ProgramIndex};
use confweave_model::names;
use confweave_model::{
    ConfigClassDescriptor, ConfigClassVariant, DiscoveryExclusion, TypeName,
};

use crate::emit::config_class_registration;
use crate::errors::BuildError;
use crate::pipeline::{BuildStage, ItemKind, PipelineContext};

/// Low-level class emitter collaborator: turns a descriptor into a
/// loadable implementation class. Returns `None` when generation is
/// skipped, e.g. the interface has no bindable members.
pub trait ClassEmitter {
    fn generate_implementation(
        &mut self,
        index: &ProgramIndex,
        descriptor: &ConfigClassDescriptor,
    ) -> Option<TypeName>;
}

/// Emitter used by the CLI: names the implementation after the target
/// interface and skips interfaces with nothing to bind.
#[derive(Debug, Default)]
pub struct DefaultClassEmitter;

impl ClassEmitter for DefaultClassEmitter {
    fn generate_implementation(
        &mut self,
        index: &ProgramIndex,
        descriptor: &ConfigClassDescriptor,
    ) -> Option<TypeName> {
        let declaration = index.lookup(&descriptor.interface)?;
        if declaration.members.is_empty() {
            return None;
        }
        Some(TypeName::new(format!("{}__ConfigImpl", descriptor.interface)))
    }
}

/// Build stage discovering `@ConfigMapping` and `@ConfigProperties`
/// interfaces and requesting code generation for each.
#[derive(Debug, Default)]
pub struct GenerateConfigClasses;

impl BuildStage for GenerateConfigClasses {
    fn name(&self) -> &'static str {
        "generate-config-classes"
    }

    fn produces(&self) -> &'static [ItemKind] {
        &[ItemKind::ConfigClasses, ItemKind::ReflectiveHints]
    }

    fn consumes(&self) -> &'static [ItemKind] {
        &[]
    }

    fn run(&mut self, ctx: &mut PipelineContext<'_>) -> Result<(), BuildError> {
        for (annotation, variant) in [
            (names::CONFIG_MAPPING, ConfigClassVariant::Mapping),
            (names::CONFIG_PROPERTIES, ConfigClassVariant::Properties),
        ] {
            let discovered: Vec<ConfigClassDescriptor> = ctx
                .index
                .find_annotated(DeclarationKind::Interface, annotation)
                .map(|decl| {
                    let prefix = decl
                        .annotation(annotation)
                        .and_then(|a| a.value("prefix"))
                        .unwrap_or("");
                    ConfigClassDescriptor::new(decl.name.clone(), prefix, variant)
                })
                .collect();

            for mut descriptor in discovered {
                descriptor.generated = ctx
                    .emitter
                    .generate_implementation(ctx.index, &descriptor);
                match &descriptor.generated {
                    Some(generated) => {
                        // Generated implementations are constructed
                        // reflectively by the mapping creator.
                        ctx.reflection.register(generated.clone(), true, false);
                        tracing::debug!(
                            interface = %descriptor.interface,
                            generated = %generated,
                            "generated config class"
                        );
                    }
                    None => {
                        tracing::debug!(
                            interface = %descriptor.interface,
                            "config class generation skipped"
                        );
                    }
                }
                ctx.config_classes.push(descriptor);
            }
        }
        Ok(())
    }
}

/// Build stage emitting one synthetic registration per descriptor with
/// a generated implementation, advertised as its full collected
/// interface hierarchy.
#[derive(Debug, Default)]
pub struct RegisterConfigClassBeans;

impl BuildStage for RegisterConfigClassBeans {
    fn name(&self) -> &'static str {
        "register-config-class-beans"
    }

    fn produces(&self) -> &'static [ItemKind] {
        &[ItemKind::SyntheticRegistrations]
    }

    fn consumes(&self) -> &'static [ItemKind] {
        &[ItemKind::ConfigClasses]
    }

    fn run(&mut self, ctx: &mut PipelineContext<'_>) -> Result<(), BuildError> {
        for descriptor in &ctx.config_classes {
            // Generation skipped: excluded from component emission.
            let Some(generated) = descriptor.generated.clone() else {
                continue;
            };
            let provided = collect_provided_types(ctx.index, &descriptor.interface);
            ctx.registrations
                .push(config_class_registration(descriptor, generated, provided));
        }
        Ok(())
    }
}

/// Build stage excluding raw `@ConfigProperties` interfaces from
/// automatic bean discovery so the container never instantiates the
/// interface itself. The exclusion is marked unremovable.
#[derive(Debug, Default)]
pub struct ExcludeRawConfigInterfaces;

impl BuildStage for ExcludeRawConfigInterfaces {
    fn name(&self) -> &'static str {
        "exclude-raw-config-interfaces"
    }

    fn produces(&self) -> &'static [ItemKind] {
        &[ItemKind::DiscoveryExclusions]
    }

    fn consumes(&self) -> &'static [ItemKind] {
        &[ItemKind::ConfigClasses]
    }

    fn run(&mut self, ctx: &mut PipelineContext<'_>) -> Result<(), BuildError> {
        for descriptor in &ctx.config_classes {
            if descriptor.is_properties() {
                ctx.exclusions.push(DiscoveryExclusion {
                    ty: descriptor.interface.clone(),
                    unremovable: true,
                });
            }
        }
        Ok(())
    }
}
