pub(crate) mod layer_doc;
