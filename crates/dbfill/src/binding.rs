use crate::{Directive, Error, FillDirection, Member, Result, Schema, StorageType};

/// The effective mapping of one member for one mapping call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Parameter name (outbound) or column name (inbound)
    pub name: String,
    pub direction: FillDirection,
    pub storage_type: Option<StorageType>,
    pub allow_missing: bool,
}

impl Binding {
    /// Resolves the parameter binding of `member`, prefix and suffix included.
    ///
    /// Returns `None` when neither the type nor the member carries a directive.
    pub fn outbound<M>(schema: &Schema<M>, member: &Member<M>) -> Result<Option<Self>> {
        Self::resolve(schema.directive.as_ref(), member, true)
    }

    /// Resolves the column binding of `member`. Prefix and suffix never apply.
    pub fn inbound<M>(schema: &Schema<M>, member: &Member<M>) -> Result<Option<Self>> {
        Self::resolve(schema.directive.as_ref(), member, false)
    }

    fn resolve<M>(
        type_directive: Option<&Directive>,
        member: &Member<M>,
        outbound: bool,
    ) -> Result<Option<Self>> {
        let member_directive = member.directive.as_ref();

        let Some(effective) = member_directive.or(type_directive) else {
            return Ok(None);
        };

        let base = non_blank(member_directive.and_then(|d| d.alias)).unwrap_or(member.name);

        let name = if outbound {
            let prefix = inherited(member_directive, type_directive, |d| d.parameter_prefix);
            let suffix = inherited(member_directive, type_directive, |d| d.parameter_suffix);
            format!("{prefix}{base}{suffix}")
        } else {
            base.to_string()
        };

        if name.trim().is_empty() {
            return Err(Error::argument_invalid(
                "name",
                format!("member `{}` resolves to an empty name", member.name),
            ));
        }

        Ok(Some(Self {
            name,
            direction: effective.fill_direction,
            storage_type: effective.storage_type,
            allow_missing: effective.allow_missing,
        }))
    }
}

fn non_blank(value: Option<&'static str>) -> Option<&'static str> {
    value.filter(|value| !value.trim().is_empty())
}

/// The member's non-blank value, else the type's, else empty.
fn inherited(
    member: Option<&Directive>,
    ty: Option<&Directive>,
    field: impl Fn(&Directive) -> Option<&'static str>,
) -> &'static str {
    non_blank(member.and_then(&field))
        .or_else(|| non_blank(ty.and_then(&field)))
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Param, Value};

    struct Row;

    fn member(name: &'static str, directive: Option<Directive>) -> Member<Row> {
        fn get(_: &Row) -> Param<'_> {
            Param::Value(Value::Null)
        }

        fn set(_: &mut Row, _: Value) -> Result<()> {
            Ok(())
        }

        Member::field(name, "i32", directive, get, set)
    }

    fn schema(directive: Option<Directive>, members: Vec<Member<Row>>) -> Schema<Row> {
        Schema::record("Row", directive, members)
    }

    #[test]
    fn excluded_without_any_directive() {
        let schema = schema(None, vec![member("a", None)]);
        assert_eq!(Binding::outbound(&schema, &schema.members()[0]).unwrap(), None);
        assert_eq!(Binding::inbound(&schema, &schema.members()[0]).unwrap(), None);
    }

    #[test]
    fn prefix_and_suffix_resolve_independently() {
        let schema = schema(
            Some(Directive::new().parameter_prefix("@p_").parameter_suffix("_IN")),
            vec![
                member("Plain", None),
                member("Over", Some(Directive::new().parameter_prefix("@param_"))),
                member("Blank", Some(Directive::new().parameter_suffix("  "))),
            ],
        );

        let names: Vec<_> = schema
            .members()
            .iter()
            .map(|m| Binding::outbound(&schema, m).unwrap().unwrap().name)
            .collect();

        assert_eq!(names, vec!["@p_Plain_IN", "@param_Over_IN", "@p_Blank_IN"]);
    }

    #[test]
    fn inbound_drops_prefix() {
        let schema = schema(
            Some(Directive::new().parameter_prefix("@p_")),
            vec![member("x", Some(Directive::new().alias("X")))],
        );
        let binding = Binding::inbound(&schema, &schema.members()[0]).unwrap().unwrap();
        assert_eq!(binding.name, "X");
    }

    #[test]
    fn member_directive_overrides_flags() {
        let schema = schema(
            Some(
                Directive::new()
                    .allow_missing(true)
                    .fill_direction(FillDirection::FromStore)
                    .storage_type(StorageType::AnsiString),
            ),
            vec![member("a", None), member("b", Some(Directive::new()))],
        );

        let a = Binding::outbound(&schema, &schema.members()[0]).unwrap().unwrap();
        assert!(a.allow_missing);
        assert_eq!(a.direction, FillDirection::FromStore);
        assert_eq!(a.storage_type, Some(StorageType::AnsiString));

        let b = Binding::outbound(&schema, &schema.members()[1]).unwrap().unwrap();
        assert!(!b.allow_missing);
        assert_eq!(b.direction, FillDirection::Both);
        assert_eq!(b.storage_type, None);
    }

    #[test]
    fn blank_alias_falls_back_to_name() {
        let schema = schema(None, vec![member("a", Some(Directive::new().alias(" ")))]);
        let binding = Binding::inbound(&schema, &schema.members()[0]).unwrap().unwrap();
        assert_eq!(binding.name, "a");
    }

    #[test]
    fn blank_name_is_rejected() {
        let schema = schema(None, vec![member(" ", Some(Directive::new()))]);
        let err = Binding::outbound(&schema, &schema.members()[0]).unwrap_err();
        assert!(err.is_argument_invalid());
    }
}
