use crate::{
    err, AnonymousValue, Binding, Command, Cursor, Error, Load, Model, Param, Result, SchemaKind,
    StorageType, Store,
};

use tracing::{debug, trace};

/// Adds one parameter to `command` for every outbound member of `model`.
///
/// Members resolving to `FromStore` or `None` are skipped, as are empty
/// structured collections. Absent (`None`) values are sent as null.
pub fn project_parameters<M: Model>(command: &mut dyn Command, model: &M) -> Result<()> {
    let schema = crate::schema::<M>();

    if let Some(direction) = schema.fill_direction() {
        if !direction.writes_to_store() {
            debug!(model = schema.name, ?direction, "model is not sent to the store");
            return Ok(());
        }
    }

    match &schema.kind {
        SchemaKind::Scalar(scalar) => {
            write_parameter(command, (scalar.alias)(model), (scalar.get)(model), None)
        }
        SchemaKind::Record(members) => {
            for member in members {
                let Some(binding) = Binding::outbound(schema, member)? else {
                    continue;
                };

                if !binding.direction.writes_to_store() {
                    debug!(
                        model = schema.name,
                        member = member.name,
                        direction = ?binding.direction,
                        "skipping member"
                    );
                    continue;
                }

                write_parameter(
                    command,
                    &binding.name,
                    member.get(model),
                    binding.storage_type,
                )?;
            }

            Ok(())
        }
    }
}

/// Adds a single named parameter holding `value`.
pub fn add_parameter<T: Store + ?Sized>(
    command: &mut dyn Command,
    name: &str,
    value: &T,
    storage_type: Option<StorageType>,
) -> Result<()> {
    write_parameter(command, name, value.store(), storage_type)
}

/// Adds the parameter of an anonymous value, named by its alias.
pub fn add_anonymous_parameter<T: Store + Load + 'static>(
    command: &mut dyn Command,
    value: &AnonymousValue<T>,
) -> Result<()> {
    project_parameters(command, value)
}

fn write_parameter(
    command: &mut dyn Command,
    name: &str,
    param: Param<'_>,
    storage_type: Option<StorageType>,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::argument_invalid(
            "name",
            "parameter name cannot be empty",
        ));
    }

    let mut parameter = command.create_parameter(name);

    match param {
        Param::Value(value) => {
            parameter.set_value(value);
            if let Some(ty) = storage_type {
                parameter.set_storage_type(ty);
            }
        }
        Param::Structured(structured) => {
            if structured.is_empty() {
                debug!(parameter = name, "skipping empty structured collection");
                return Ok(());
            }
            structured.write_parameter(&mut parameter)?;
        }
    }

    trace!(parameter = name, storage_type = ?parameter.storage_type, "projected parameter");
    command.add_parameter(parameter)
}

/// Assigns every inbound member of `model` from the current row of `cursor`.
///
/// Columns match member names (or aliases) exactly. A missing column fails
/// with a missing-column error unless the member allows it.
pub fn populate<M: Model>(model: &mut M, cursor: &dyn Cursor) -> Result<()> {
    let schema = crate::schema::<M>();

    if let Some(direction) = schema.fill_direction() {
        if !direction.reads_from_store() {
            debug!(model = schema.name, ?direction, "model is not read from the store");
            return Ok(());
        }
    }

    match &schema.kind {
        SchemaKind::Scalar(scalar) => {
            if cursor.column_count() == 0 {
                return Err(Error::missing_column((scalar.alias)(model), schema.name));
            }

            let value = cursor.get_at(0)?;
            (scalar.set)(model, value).map_err(|err| {
                err.context(err!("cannot populate scalar value of `{}`", schema.name))
            })
        }
        SchemaKind::Record(members) => {
            for member in members {
                let Some(binding) = Binding::inbound(schema, member)? else {
                    continue;
                };

                if !binding.direction.reads_from_store() {
                    debug!(
                        model = schema.name,
                        member = member.name,
                        direction = ?binding.direction,
                        "skipping member"
                    );
                    continue;
                }

                if !cursor.has_column(&binding.name) {
                    if binding.allow_missing {
                        debug!(model = schema.name, column = %binding.name, "column missing, allowed");
                        continue;
                    }

                    return Err(Error::missing_column(binding.name, schema.name));
                }

                let value = cursor.get(&binding.name)?;
                member.set(model, value).map_err(|err| {
                    err.context(err!(
                        "cannot populate member `{}` of `{}`",
                        member.name,
                        schema.name
                    ))
                })?;

                trace!(model = schema.name, member = member.name, "populated member");
            }

            Ok(())
        }
    }
}

/// Reads every remaining row of `cursor` into a fresh model.
pub fn populate_all<M: Model + Default>(cursor: &mut dyn Cursor) -> Result<Vec<M>> {
    let mut models = vec![];

    while cursor.advance()? {
        let mut model = M::default();
        populate(&mut model, cursor)?;
        models.push(model);
    }

    Ok(models)
}
