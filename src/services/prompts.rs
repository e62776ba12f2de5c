//! Fixed instructions and the reference schema sent to the model.

/// A small but complete form.io form the model is shown as a formatting
/// exemplar: a required text field, a yes/no radio, a text field that is only
/// shown when the radio is "yes", and a submit button.
pub const REFERENCE_SCHEMA: &str = r#"{
    "title": "Register",
    "display": "form",
    "type": "form",
    "name": "register",
    "path": "register",
    "components": [{
        "input": true,
        "tableView": true,
        "inputType": "text",
        "inputMask": "",
        "label": "First Name",
        "key": "firstName",
        "placeholder": "",
        "prefix": "",
        "suffix": "",
        "multiple": false,
        "defaultValue": "",
        "protected": false,
        "unique": false,
        "persistent": true,
        "validate": {
            "required": true,
            "minLength": "",
            "maxLength": "",
            "pattern": "",
            "custom": "",
            "customPrivate": false
        },
        "conditional": {
            "show": "",
            "when": null,
            "eq": ""
        },
        "type": "textfield",
        "tags": [],
        "lockKey": true,
        "isNew": false
    }, {
        "label": "Radio",
        "optionsLabelPosition": "right",
        "inline": false,
        "tableView": false,
        "values": [
            {"label": "yes", "value": "yes", "shortcut": ""},
            {"label": "no", "value": "no", "shortcut": ""}
        ],
        "validateWhenHidden": false,
        "key": "radio",
        "type": "radio",
        "input": true
    }, {
        "label": "Comment/Action",
        "applyMaskOn": "change",
        "tableView": true,
        "validateWhenHidden": false,
        "key": "commentAction",
        "type": "textfield",
        "input": true,
        "conditional": {
            "show": true,
            "when": "radio",
            "eq": "yes"
        }
    }, {
        "input": true,
        "label": "Submit",
        "tableView": false,
        "key": "submit",
        "size": "md",
        "leftIcon": "",
        "rightIcon": "",
        "block": false,
        "action": "submit",
        "disableOnInvalid": false,
        "theme": "primary",
        "type": "button"
    }]
}"#;

pub const EXTRACTION_SYSTEM_PROMPT: &str = "\
You are an assistant specialized in thoroughly analyzing images of paper forms and converting them to digital form structures. \
Meticulously examine every element in the image and identify ALL form fields, sections, labels, and input types. \
Be exhaustive: do not miss any field, checkbox, dropdown, text area, signature line or other input element. \
Produce a complete form.io compatible JSON representation that includes EVERY field visible in the image. \
Map each field to the most appropriate form.io component type (textfield, textarea, select, radio, checkbox, email, phoneNumber, number, datetime, signature, etc). \
Always include the properties input, tableView, type, key and label for each component, with keys in camelCase and unique within the form. \
Pay close attention to field groupings, sections, and hierarchical relationships between fields, and represent complex layouts accurately. \
Follow form.io's format requirements exactly as shown in the reference example.";

pub fn extraction_user_prompt() -> String {
    format!(
        "Extract the COMPLETE form structure from this document and create a comprehensive form.io compatible JSON representation. \
Identify and include EVERY field visible in the document without exception.\n\n\
Analyze the form systematically, working from top to bottom, left to right. \
Don't miss any field, checkbox, dropdown, or other input element. \
For each field, determine the most appropriate form.io component type.\n\n\
Use the example below as a reference for the format, but adapt it to include ALL field types present in this specific form:\n\n{}",
        REFERENCE_SCHEMA
    )
}

pub const ENHANCEMENT_SYSTEM_PROMPT: &str = "\
You are an assistant specialized in enhancing digital form structures. \
Comprehensively improve the given form.io compatible form structure by:\n\
1. Adding appropriate validation rules for ALL fields (required, pattern matching, min/max length, etc.)\n\
2. Optimizing field organization and layout for a better user experience\n\
3. Implementing smart conditional logic between related fields\n\
4. Enhancing labels, placeholders, and help text for clarity\n\
5. Ensuring proper field types and formats (email validation, phone formats, etc.)\n\
6. Preserving all existing fields while improving their configuration\n\
7. Maintaining proper form.io structure and properties\n\
Enhance EVERY field in the form while keeping the whole structure fully compatible with form.io. \
Reply with the complete enhanced form as a single JSON object.";

pub fn enhancement_user_prompt(form_json: &str) -> String {
    format!(
        "Enhance this form.io structure to create a polished, professional form with proper validation and organization:\n\n{}\n\n\
Improve EVERY field in the form while maintaining form.io compatibility. \
Reference this example for the correct property structure, but adapt it to the specific fields in this form:\n\n{}",
        form_json, REFERENCE_SCHEMA
    )
}

pub const TEXT_EXTRACTION_SYSTEM_PROMPT: &str = "\
You are an assistant designed to extract text from images of forms. \
Extract all text content from the provided document, maintaining the structure as much as possible.";

pub const TEXT_EXTRACTION_USER_PROMPT: &str = "Extract all text from this form.";
