use crate::schema::Schema;
use std::sync::Arc;

pub(crate) struct Table {
    name: String,
    schema: Arc<Schema>,
}

impl Table {
    pub(crate) fn new<N: Into<String>>(name: N, schema: Schema) -> Table {
        Self {
            name: name.into(),
            schema: Arc::new(schema),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }
}
