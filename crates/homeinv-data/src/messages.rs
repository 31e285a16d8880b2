//! User-facing failure messages and log contexts

// Shown to the user
pub const NO_USER_FOUND: &str = "This user was not found in the database";
pub const NO_HOME_FOUND: &str = "This home was not found in the database";
pub const NO_HOMES_FOUND: &str = "No homes found in the database";
pub const NO_ROOM_FOUND: &str = "This room was not found in the database";
pub const NO_FURNITURE_FOUND: &str = "This piece of furniture was not found in the database";
pub const NO_COMPARTMENT_FOUND: &str = "This compartment was not found in the database";
pub const NO_ITEM_FOUND: &str = "This item was not found in the database";
pub const NO_ITEM_ROUTE_FOUND: &str = "The route of this item was not found";
pub const NO_MEMBERS_FOUND: &str = "No members of this home were found in the database";
pub const NO_INVITATION_FOUND: &str = "This invitation was not found in the database";
pub const INVITATION_RESOLVED: &str =
    "This invitation was not found or has already been resolved";
pub const HOME_NOT_CREATED: &str = "The home was not created";
pub const HOME_NOT_DELETED: &str = "The home was not deleted";
pub const PERMISSION_DENIED: &str =
    "ACCESS DENIED - ONLY USERS WITH GRANTED ACCESS CAN ACCESS THIS FEATURE";
pub const WRONG_LOGIN: &str = "Wrong login info";
pub const ACCOUNT_NOT_ACTIVATED: &str = "Account not activated";
pub const USER_ALREADY_EXISTS: &str = "Username or email already exists";

pub const UPDATING_HOME: &str = "There was an error while updating the home";
pub const SAVING_ROOM: &str = "There was an error while saving the room";
pub const UPDATING_ROOM: &str = "There was an error while updating the room";
pub const SAVING_FURNITURE: &str = "There was an error while saving the piece of furniture";
pub const UPDATING_FURNITURE: &str = "There was an error while updating the piece of furniture";
pub const SAVING_COMPARTMENT: &str = "There was an error while saving the compartment";
pub const UPDATING_COMPARTMENT: &str = "There was an error while updating the compartment";
pub const SAVING_ITEM: &str = "There was an error while saving the item";
pub const UPDATING_ITEM: &str = "There was an error while updating the item";

// Log contexts
pub const RETRIEVING_HOMES_BY_USER: &str = "retrieving homes by user";
pub const RETRIEVING_HOME_BY_ID: &str = "retrieving a home by its id";
pub const SAVING_HOME_CONTEXT: &str = "saving the home";
pub const UPDATING_HOME_CONTEXT: &str = "updating the home";
pub const DELETING_HOME_CONTEXT: &str = "deleting the home";
pub const RETRIEVING_ROOMS_BY_HOME: &str = "retrieving the rooms in a home";
pub const RETRIEVING_ROOM_BY_ID: &str = "retrieving the room by its id";
pub const DELETING_ROOM: &str = "deleting the room";
pub const RETRIEVING_FURNITURE_BY_ROOM: &str = "retrieving the furniture in a room";
pub const RETRIEVING_FURNITURE_BY_ID: &str = "retrieving a piece of furniture by its id";
pub const DELETING_FURNITURE: &str = "deleting the piece of furniture";
pub const RETRIEVING_COMPARTMENTS_BY_FURNITURE: &str = "retrieving the compartments of a piece of furniture";
pub const RETRIEVING_COMPARTMENT_BY_ID: &str = "retrieving a compartment by its id";
pub const DELETING_COMPARTMENT: &str = "deleting the compartment";
pub const RETRIEVING_ITEMS_BY_COMPARTMENT: &str = "retrieving the items in a compartment";
pub const SEARCHING_ITEMS: &str = "searching items in a home";
pub const RETRIEVING_ITEM_BY_ID: &str = "retrieving an item by its id";
pub const DELETING_ITEM: &str = "deleting the item";
pub const MOVING_ITEM: &str = "moving the item";
pub const RETRIEVING_ITEM_ROUTE: &str = "retrieving the route of an item";
pub const LOGGING_IN: &str = "logging in";
pub const REGISTERING: &str = "registering a user";
pub const RETRIEVING_USER_BY_ID: &str = "retrieving the user by id";
pub const RETRIEVING_USER_BY_USERNAME: &str = "retrieving the user by username";
pub const RETRIEVING_USERS_BY_HOME: &str = "retrieving the users in a home";
pub const DELETING_USER: &str = "deleting the user";
pub const SENDING_INVITATION: &str = "sending an invitation";
pub const RETRIEVING_INVITATIONS: &str = "retrieving the invitations of a user";
pub const RETRIEVING_INVITATION_INFO: &str = "retrieving invitation info";
pub const ACCEPTING_INVITATION: &str = "accepting an invitation";
pub const DECLINING_INVITATION: &str = "declining an invitation";
