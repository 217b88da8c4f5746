//! The compiled-in event catalog.
//!
//! Adding a new event is a pure data change: append a descriptor here and
//! tag it with the companion app that produces it (or `None` for events the
//! host platform always emits). Declaration order is the order consumers
//! see in the listing.

use super::schema::{BOOL, Field, INT, NULLABLE_STRING, STRING, Shape, field};
use super::types::{APP_CALENDAR, APP_FORMS, APP_TABLES, EventDescriptor};

/// Acting user, common to every event envelope.
const USER: Shape = Shape::Object(&[field("uid", STRING), field("displayName", STRING)]);

const FORM: &[Field] = &[
    field("id", INT),
    field("hash", STRING),
    field("title", STRING),
    field("description", STRING),
    field("ownerId", STRING),
    field("fileId", NULLABLE_STRING),
    field("fileFormat", NULLABLE_STRING),
    field("created", INT),
    field("access", INT),
    field("expires", INT),
    field("isAnonymous", BOOL),
    field("submitMultiple", BOOL),
    field("showExpiration", BOOL),
    field("lastUpdated", INT),
    field("submissionMessage", NULLABLE_STRING),
    field("state", INT),
];

const SUBMISSION: &[Field] = &[
    field("id", INT),
    field("formId", INT),
    field("userId", STRING),
    field("timestamp", INT),
];

const TAG: Shape = Shape::Object(&[
    field("id", INT),
    field("name", STRING),
    field("userVisible", BOOL),
    field("userAssignable", BOOL),
]);

const CALENDAR_OBJECT: &[Field] = &[
    field("class", STRING),
    field("calendarId", INT),
    field(
        "calendarData",
        Shape::Object(&[
            field("principaluri", STRING),
            field("uri", STRING),
            field("displayname", STRING),
        ]),
    ),
    field(
        "objectData",
        Shape::Object(&[field("uri", STRING), field("calendardata", STRING)]),
    ),
];

/// Every event Windmill advertises, in listing order.
pub const CATALOG: &[EventDescriptor] = &[
    EventDescriptor {
        name: "FormSubmittedEvent",
        description: "A submission to a form in Nextcloud Forms",
        canonical_type: "OCA\\Forms\\Events\\FormSubmittedEvent",
        required_app: Some(APP_FORMS),
        payload: Shape::Object(&[
            field("user", USER),
            field("time", INT),
            field(
                "event",
                Shape::Object(&[
                    field("class", STRING),
                    field("form", Shape::Object(FORM)),
                    field("submission", Shape::Object(SUBMISSION)),
                ]),
            ),
        ]),
    },
    EventDescriptor {
        name: "NodeWrittenEvent",
        description: "A node in Nextcloud (a file/folder/similar) has been written",
        canonical_type: "OCP\\Files\\Events\\Node\\NodeWrittenEvent",
        required_app: None,
        payload: Shape::Object(&[
            field("user", USER),
            field("time", INT),
            field(
                "event",
                Shape::Object(&[
                    field("class", STRING),
                    field(
                        "node",
                        Shape::Object(&[field("id", STRING), field("path", STRING)]),
                    ),
                ]),
            ),
        ]),
    },
    EventDescriptor {
        name: "SystemTagAssignedEvent",
        description: "A system tag has been assigned to an object",
        canonical_type: "OCP\\SystemTag\\MapperEvent",
        required_app: None,
        payload: Shape::Object(&[
            field("user", USER),
            field("time", INT),
            field(
                "event",
                Shape::Object(&[
                    field("class", STRING),
                    field("objectType", STRING),
                    field("objectId", STRING),
                    field("tags", Shape::List(&TAG)),
                ]),
            ),
        ]),
    },
    EventDescriptor {
        name: "TableRowAddedEvent",
        description: "A row has been added to a table in Nextcloud Tables",
        canonical_type: "OCA\\Tables\\Event\\RowAddedEvent",
        required_app: Some(APP_TABLES),
        payload: Shape::Object(&[
            field("user", USER),
            field("time", INT),
            field(
                "event",
                Shape::Object(&[
                    field("class", STRING),
                    field(
                        "table",
                        Shape::Object(&[
                            field("id", INT),
                            field("title", STRING),
                            field("ownership", STRING),
                        ]),
                    ),
                    field(
                        "row",
                        Shape::Object(&[
                            field("id", INT),
                            field("tableId", INT),
                            field("createdBy", STRING),
                            field("createdAt", INT),
                        ]),
                    ),
                ]),
            ),
        ]),
    },
    EventDescriptor {
        name: "CalendarObjectCreatedEvent",
        description: "An object has been created in a calendar",
        canonical_type: "OCA\\DAV\\Events\\CalendarObjectCreatedEvent",
        required_app: Some(APP_CALENDAR),
        payload: Shape::Object(&[
            field("user", USER),
            field("time", INT),
            field("event", Shape::Object(CALENDAR_OBJECT)),
        ]),
    },
    EventDescriptor {
        name: "CalendarObjectUpdatedEvent",
        description: "An object has been updated in a calendar",
        canonical_type: "OCA\\DAV\\Events\\CalendarObjectUpdatedEvent",
        required_app: Some(APP_CALENDAR),
        payload: Shape::Object(&[
            field("user", USER),
            field("time", INT),
            field("event", Shape::Object(CALENDAR_OBJECT)),
        ]),
    },
];
