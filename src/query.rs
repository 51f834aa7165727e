//! URL query component for list endpoints.
//!
//! Parameters keep their insertion order, so the serialized query string is
//! stable for a given input order. An empty [`Query`] produces a URL without
//! a trailing `?`.
pub type ReqwestQuery = Vec<ReqwestQueryParam>;
pub type ReqwestQueryParam = (String, String);

/// URL query component: pagination and filter parameters for list endpoints.
#[derive(Default, Debug, Clone)]
pub struct Query {
    params: Vec<QueryParam>,
}

impl Query {
    #[must_use]
    pub fn empty() -> Self {
        Self { params: vec![] }
    }

    #[must_use]
    pub fn params(params: Vec<QueryParam>) -> Self {
        Self { params }
    }

    pub fn add_param(&mut self, param: QueryParam) {
        self.params.push(param);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl From<Query> for ReqwestQuery {
    fn from(query: Query) -> Self {
        query
            .params
            .iter()
            .map(|param| ReqwestQueryParam::from((*param).clone()))
            .collect()
    }
}

/// URL query param
#[derive(Clone, Debug)]
pub struct QueryParam {
    name: String,
    value: String,
}

impl QueryParam {
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

impl From<QueryParam> for ReqwestQueryParam {
    fn from(param: QueryParam) -> Self {
        (param.name, param.value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Query, QueryParam, ReqwestQuery};

    #[test]
    fn params_should_keep_their_insertion_order() {
        let query = Query::params(vec![
            QueryParam::new("page", "1"),
            QueryParam::new("pageSize", "10"),
        ]);

        assert_eq!(
            ReqwestQuery::from(query),
            vec![
                ("page".to_string(), "1".to_string()),
                ("pageSize".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn an_empty_query_should_have_no_params() {
        assert!(Query::default().is_empty());
        assert!(ReqwestQuery::from(Query::empty()).is_empty());
    }
}
