//! Rewrite the labeled parse tree into decoded values.

use crate::ast::{ParseNode, PropertyNode};
use crate::parser::ParseError;
use crate::value::{ArgumentList, Property, Value};

/// Transform the top-level nodes into an argument list. One node still yields a list.
pub fn transform(nodes: Vec<ParseNode>) -> Result<ArgumentList, ParseError> {
    let values = nodes
        .into_iter()
        .map(transform_node)
        .collect::<Result<Vec<_>, _>>()?;
    log::trace!("decoded {} argument(s)", values.len());
    Ok(ArgumentList::new(values))
}

/// Transform a single node (and everything below it).
pub fn transform_node(node: ParseNode) -> Result<Value, ParseError> {
    match node {
        ParseNode::Integer { text, offset } => match text.parse::<i64>() {
            Ok(n) => Ok(Value::Integer(n)),
            Err(source) => Err(ParseError::IntegerDecode { text, offset, source }),
        },
        ParseNode::String(s) => Ok(Value::Text(s)),
        ParseNode::Address(s) => Ok(Value::Address(s)),
        ParseNode::FlagList(s) => Ok(Value::FlagExpr(s)),
        ParseNode::Null => Ok(Value::Null),
        ParseNode::ArrayElement(inner) => transform_node(*inner),
        ParseNode::ArrayElements(items) => {
            let items = items
                .into_iter()
                .map(transform_node)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::list(items))
        }
        ParseNode::Properties(props) => {
            let props = props
                .into_iter()
                .map(transform_property)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::object(props))
        }
    }
}

fn transform_property(prop: PropertyNode) -> Result<Property, ParseError> {
    let values = prop
        .value
        .into_iter()
        .map(transform_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Property::new(prop.key, values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(text: &str) -> ParseNode {
        ParseNode::Integer { text: text.to_string(), offset: 0 }
    }

    #[test]
    fn scalars() {
        assert_eq!(transform_node(int("-7")).unwrap(), Value::Integer(-7));
        assert_eq!(transform_node(ParseNode::Null).unwrap(), Value::Null);
        assert_eq!(
            transform_node(ParseNode::Address("0xDEAD".into())).unwrap(),
            Value::Address("0xDEAD".into())
        );
        assert_eq!(
            transform_node(ParseNode::FlagList("A|B".into())).unwrap(),
            Value::FlagExpr("A|B".into())
        );
    }

    #[test]
    fn array_elements_are_unwrapped() {
        let node = ParseNode::ArrayElements(vec![
            ParseNode::ArrayElement(Box::new(int("1"))),
            ParseNode::ArrayElement(Box::new(ParseNode::String("s".into()))),
        ]);
        assert_eq!(
            transform_node(node).unwrap(),
            Value::list(vec![Value::Integer(1), Value::Text("s".into())])
        );
    }

    #[test]
    fn properties_keep_value_sequences() {
        let node = ParseNode::Properties(vec![
            PropertyNode { key: "a".into(), value: vec![int("1"), int("2")] },
            PropertyNode { key: "b".into(), value: vec![] },
        ]);
        let v = transform_node(node).unwrap();
        let props = v.as_object().expect("object");
        assert_eq!(&*props[0].values, &[Value::Integer(1), Value::Integer(2)]);
        assert!(props[1].values.is_empty());
    }

    #[test]
    fn single_node_is_wrapped_in_a_list() {
        let list = transform(vec![int("0")]).unwrap();
        assert_eq!(list, vec![Value::Integer(0)]);
    }

    #[test]
    fn out_of_range_integer_fails() {
        let node = ParseNode::Integer { text: "99999999999999999999".into(), offset: 4 };
        match transform_node(node) {
            Err(ParseError::IntegerDecode { text, offset, .. }) => {
                assert_eq!(text, "99999999999999999999");
                assert_eq!(offset, 4);
            }
            other => panic!("expected IntegerDecode, got {:?}", other),
        }
    }

    #[test]
    fn nested_failure_aborts_whole_transform() {
        let node = ParseNode::ArrayElements(vec![ParseNode::ArrayElement(Box::new(int(
            "-99999999999999999999",
        )))]);
        assert!(transform(vec![int("1"), node]).is_err());
    }
}
