//! Screen behaviour over in-memory repositories

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use futures::stream;
use homeinv_application::{
    usecases::{
        CompartmentUseCases, FurnitureUseCases, HomeUseCases, InvitationUseCases, ItemUseCases,
        RoomUseCases, UserUseCases,
    },
    SessionContext,
};
use homeinv_domain::repositories::{
    CompartmentRepository, FurnitureRepository, HomeRepository, InvitationRepository,
    ItemRepository, RoomRepository, UserRepository,
};
use homeinv_domain::*;
use homeinv_presentation::*;

// ============================================================================
// Mock Implementations
// ============================================================================

fn respond<T: Send + 'static>(result: Result<T, Failure>) -> ResourceStream<T> {
    Box::pin(stream::iter(vec![Resource::Loading, Resource::from(result)]))
}

fn unsupported<T: Send + 'static>() -> ResourceStream<T> {
    respond(Err(Failure::status(501, "Not Implemented")))
}

#[derive(Default)]
struct MockHomes {
    homes: Mutex<Vec<Home>>,
}

impl MockHomes {
    fn with(homes: Vec<Home>) -> Self {
        Self { homes: Mutex::new(homes) }
    }
}

impl HomeRepository for MockHomes {
    fn homes_by_user(&self, user_id: EntityId) -> ResourceStream<MyHomes> {
        let (owned, member): (Vec<Home>, Vec<Home>) = self
            .homes
            .lock()
            .unwrap()
            .iter()
            .cloned()
            .partition(|home| home.is_owned_by(user_id));
        respond(Ok(MyHomes { owned, member }))
    }

    fn home_by_id(&self, id: EntityId) -> ResourceStream<Home> {
        let homes = self.homes.lock().unwrap();
        respond(homes.iter().find(|h| h.id == id).cloned().ok_or_else(Failure::not_found))
    }

    fn save_home(&self, mut home: Home) -> ResourceStream<Home> {
        assert_eq!(home.id, UNSAVED_ID);
        home.id = 77;
        self.homes.lock().unwrap().push(home.clone());
        respond(Ok(home))
    }

    fn update_home(&self, home: Home) -> ResourceStream<Home> {
        respond(Ok(home))
    }

    fn delete_home(&self, id: EntityId) -> ResourceStream<()> {
        self.homes.lock().unwrap().retain(|h| h.id != id);
        respond(Ok(()))
    }
}

#[derive(Default)]
struct MockRooms {
    saved: Mutex<Vec<Room>>,
    deleted: Mutex<Vec<EntityId>>,
}

impl MockRooms {
    fn with(rooms: Vec<Room>) -> Self {
        Self {
            saved: Mutex::new(rooms),
            ..Default::default()
        }
    }
}

impl RoomRepository for MockRooms {
    fn rooms_by_home(&self, home_id: EntityId) -> ResourceStream<Vec<Room>> {
        let rooms = self.saved.lock().unwrap();
        respond(Ok(rooms.iter().filter(|r| r.home_id == home_id).cloned().collect()))
    }

    fn room_by_id(&self, id: EntityId) -> ResourceStream<Room> {
        let rooms = self.saved.lock().unwrap();
        respond(rooms.iter().find(|r| r.id == id).cloned().ok_or_else(Failure::not_found))
    }

    fn save_room(&self, mut room: Room) -> ResourceStream<Room> {
        assert_eq!(room.id, UNSAVED_ID);
        room.id = 42;
        self.saved.lock().unwrap().push(room.clone());
        respond(Ok(room))
    }

    fn update_room(&self, room: Room) -> ResourceStream<Room> {
        respond(Ok(room))
    }

    fn delete_room(&self, id: EntityId) -> ResourceStream<()> {
        self.deleted.lock().unwrap().push(id);
        respond(Ok(()))
    }
}

#[derive(Default)]
struct MockFurniture {
    saved: Mutex<Vec<Furniture>>,
    deleted: Mutex<Vec<EntityId>>,
}

impl MockFurniture {
    fn with(furniture: Vec<Furniture>) -> Self {
        Self {
            saved: Mutex::new(furniture),
            ..Default::default()
        }
    }
}

impl FurnitureRepository for MockFurniture {
    fn furniture_by_room(&self, room_id: EntityId) -> ResourceStream<Vec<Furniture>> {
        let furniture = self.saved.lock().unwrap();
        respond(Ok(furniture.iter().filter(|f| f.room_id == room_id).cloned().collect()))
    }

    fn furniture_by_id(&self, id: EntityId) -> ResourceStream<Furniture> {
        let furniture = self.saved.lock().unwrap();
        respond(furniture.iter().find(|f| f.id == id).cloned().ok_or_else(Failure::not_found))
    }

    fn save_furniture(&self, mut furniture: Furniture) -> ResourceStream<Furniture> {
        assert_eq!(furniture.id, UNSAVED_ID);
        furniture.id = 9;
        self.saved.lock().unwrap().push(furniture.clone());
        respond(Ok(furniture))
    }

    fn update_furniture(&self, furniture: Furniture) -> ResourceStream<Furniture> {
        respond(Ok(furniture))
    }

    fn delete_furniture(&self, id: EntityId) -> ResourceStream<()> {
        self.deleted.lock().unwrap().push(id);
        respond(Ok(()))
    }
}

#[derive(Default)]
struct MockCompartments {
    saved: Mutex<Vec<Compartment>>,
    deleted: Mutex<Vec<EntityId>>,
}

impl MockCompartments {
    fn with(compartments: Vec<Compartment>) -> Self {
        Self {
            saved: Mutex::new(compartments),
            ..Default::default()
        }
    }
}

impl CompartmentRepository for MockCompartments {
    fn compartments_by_furniture(&self, furniture_id: EntityId) -> ResourceStream<Vec<Compartment>> {
        let compartments = self.saved.lock().unwrap();
        respond(Ok(compartments
            .iter()
            .filter(|c| c.furniture_id == furniture_id)
            .cloned()
            .collect()))
    }

    fn compartment_by_id(&self, id: EntityId) -> ResourceStream<Compartment> {
        let compartments = self.saved.lock().unwrap();
        respond(compartments.iter().find(|c| c.id == id).cloned().ok_or_else(Failure::not_found))
    }

    fn save_compartment(&self, mut compartment: Compartment) -> ResourceStream<Compartment> {
        assert_eq!(compartment.id, UNSAVED_ID);
        compartment.id = 4;
        self.saved.lock().unwrap().push(compartment.clone());
        respond(Ok(compartment))
    }

    fn update_compartment(&self, compartment: Compartment) -> ResourceStream<Compartment> {
        respond(Ok(compartment))
    }

    fn delete_compartment(&self, id: EntityId) -> ResourceStream<()> {
        self.deleted.lock().unwrap().push(id);
        respond(Ok(()))
    }
}

fn winter_tag() -> Tag {
    Tag { id: 1, name: "winter".into(), home_id: 5 }
}

#[derive(Default)]
struct MockItems {
    saved: Mutex<Vec<NewItem>>,
    updated: Mutex<Vec<ItemDetail>>,
}

impl ItemRepository for MockItems {
    fn items_by_compartment(&self, _compartment_id: EntityId) -> ResourceStream<Vec<Item>> {
        respond(Ok(vec![]))
    }

    fn items_by_search(&self, _home_id: EntityId, word: String) -> ResourceStream<Vec<Item>> {
        let items = if word == "box" {
            vec![Item { id: 1, name: "Shoe box".into(), compartment_id: 4 }]
        } else {
            vec![]
        };
        respond(Ok(items))
    }

    fn item_by_id(&self, id: EntityId) -> ResourceStream<ItemDetail> {
        respond(Ok(ItemDetail {
            id,
            name: "Scarf".into(),
            compartment_id: 4,
            tags: vec![winter_tag()],
        }))
    }

    fn save_item(&self, item: NewItem) -> ResourceStream<ItemDetail> {
        self.saved.lock().unwrap().push(item.clone());
        respond(Ok(ItemDetail {
            id: 30,
            name: item.name,
            compartment_id: item.compartment_id,
            tags: vec![],
        }))
    }

    fn update_item(&self, item: ItemDetail) -> ResourceStream<ItemDetail> {
        self.updated.lock().unwrap().push(item.clone());
        respond(Ok(item))
    }

    fn delete_item(&self, _id: EntityId) -> ResourceStream<()> {
        respond(Ok(()))
    }

    fn move_item(&self, _item_move: ItemMove) -> ResourceStream<()> {
        respond(Ok(()))
    }

    fn item_route(&self, _id: EntityId) -> ResourceStream<String> {
        unsupported()
    }
}

struct MockUsers;

impl UserRepository for MockUsers {
    fn login(&self, credentials: Credentials) -> ResourceStream<EntityId> {
        if credentials.password == "secret" {
            respond(Ok(7))
        } else {
            respond(Err(Failure::status(401, "Unauthorized").with_message("Wrong login info")))
        }
    }

    fn register(&self, registration: Registration) -> ResourceStream<()> {
        if registration.username == "taken" {
            return respond(Err(
                Failure::status(400, "Bad Request").with_message("Username or email already exists")
            ));
        }
        respond(Ok(()))
    }

    fn user_by_id(&self, id: EntityId) -> ResourceStream<User> {
        respond(Ok(User { id, username: "ana".into(), email: "ana@example.com".into() }))
    }

    fn user_by_username(&self, _username: String) -> ResourceStream<User> {
        unsupported()
    }

    fn home_users(&self, _home_id: EntityId) -> ResourceStream<HomeUsers> {
        unsupported()
    }

    fn delete_user(&self, _id: EntityId) -> ResourceStream<()> {
        respond(Ok(()))
    }
}

#[derive(Default)]
struct MockInvitations {
    sent: Mutex<Vec<InvitationToSend>>,
    resolved: Mutex<Vec<EntityId>>,
    calls: AtomicUsize,
}

impl MockInvitations {
    fn resolve(&self, id: EntityId) -> ResourceStream<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut resolved = self.resolved.lock().unwrap();
        if resolved.contains(&id) {
            return respond(Err(Failure::not_found()));
        }
        resolved.push(id);
        respond(Ok(()))
    }
}

impl InvitationRepository for MockInvitations {
    fn send_invitation(&self, invitation: InvitationToSend) -> ResourceStream<()> {
        self.sent.lock().unwrap().push(invitation);
        respond(Ok(()))
    }

    fn invitations_by_user(&self, user_id: EntityId) -> ResourceStream<Vec<Invitation>> {
        respond(Ok(vec![
            Invitation { id: 11, inviter_id: 3, invitee_id: user_id, home_id: 5 },
            Invitation { id: 12, inviter_id: 4, invitee_id: user_id, home_id: 6 },
        ]))
    }

    fn invitation_info(&self, id: EntityId) -> ResourceStream<InvitationInfo> {
        respond(Ok(InvitationInfo { id, inviter_name: "bo".into(), home_name: "Flat".into() }))
    }

    fn accept_invitation(&self, id: EntityId) -> ResourceStream<()> {
        self.resolve(id)
    }

    fn decline_invitation(&self, id: EntityId) -> ResourceStream<()> {
        self.resolve(id)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_login_sets_session_user() {
    let session = Arc::new(SessionContext::new());
    let screen = LoginScreen::new(UserUseCases::new(Arc::new(MockUsers)), Arc::clone(&session));
    let mut effects = screen.effects().unwrap();

    screen.dispatch(LoginEvent::UsernameChanged("ana".into()));
    screen.dispatch(LoginEvent::PasswordChanged("secret".into()));
    screen.dispatch(LoginEvent::Login);
    screen.settle().await;

    assert_eq!(session.user_id(), Some(7));
    assert_eq!(effects.try_recv().ok(), Some(LoginEffect::LoggedIn(7)));
    assert!(!screen.snapshot().is_loading);
}

#[tokio::test]
async fn test_wrong_login_shows_error_until_displayed() {
    let session = Arc::new(SessionContext::new());
    let screen = LoginScreen::new(UserUseCases::new(Arc::new(MockUsers)), Arc::clone(&session));
    let mut effects = screen.effects().unwrap();

    screen.dispatch(LoginEvent::UsernameChanged("ana".into()));
    screen.dispatch(LoginEvent::PasswordChanged("nope".into()));
    screen.dispatch(LoginEvent::Login);
    screen.settle().await;

    assert_eq!(session.user_id(), None);
    assert!(effects.try_recv().is_err());
    assert_eq!(screen.snapshot().error.as_deref(), Some("Wrong login info"));

    screen.dispatch(LoginEvent::ErrorDisplayed);
    assert_eq!(screen.snapshot().error, None);
}

#[tokio::test]
async fn test_create_room_opens_it_once() {
    let session = Arc::new(SessionContext::new());
    session.set_user(7);
    session.set_home(5);

    let screen = RoomsScreen::new(RoomUseCases::new(Arc::new(MockRooms::default())), session);
    let mut effects = screen.effects().unwrap();

    screen.dispatch(RoomsEvent::ShowCreateDialog);
    screen.dispatch(RoomsEvent::CreateRoom("Kitchen".into()));
    screen.settle().await;

    let state = screen.snapshot();
    assert_eq!(state.rooms, vec![Room { id: 42, name: "Kitchen".into(), home_id: 5 }]);
    assert!(!state.show_create_dialog);

    assert_eq!(effects.try_recv().ok(), Some(RoomsEffect::OpenRoom(42)));
    assert!(effects.try_recv().is_err());
}

#[tokio::test]
async fn test_create_room_without_home() {
    let screen = RoomsScreen::new(
        RoomUseCases::new(Arc::new(MockRooms::default())),
        Arc::new(SessionContext::new()),
    );

    screen.dispatch(RoomsEvent::CreateRoom("Kitchen".into()));
    screen.settle().await;

    assert_eq!(screen.snapshot().error.as_deref(), Some("No home is selected"));
}

#[tokio::test]
async fn test_blank_room_name_is_rejected() {
    let session = Arc::new(SessionContext::new());
    session.set_home(5);
    let rooms = Arc::new(MockRooms::default());
    let screen = RoomsScreen::new(RoomUseCases::new(rooms.clone()), session);

    screen.dispatch(RoomsEvent::CreateRoom("   ".into()));
    screen.settle().await;

    assert!(screen.snapshot().error.is_some());
    assert!(rooms.saved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_without_matches_is_not_an_error() {
    let screen = SearchScreen::new(ItemUseCases::new(Arc::new(MockItems::default())));

    screen.dispatch(SearchEvent::GetSearch { home_id: 5, word: "sock".into() });
    screen.settle().await;

    let state = screen.snapshot();
    assert!(state.items.is_empty());
    assert_eq!(state.error, None);
    assert!(state.has_searched);
    assert_eq!(state.notice(), Some(NO_ITEMS_FOUND));
}

#[tokio::test]
async fn test_search_then_open_item() {
    let screen = SearchScreen::new(ItemUseCases::new(Arc::new(MockItems::default())));
    let mut effects = screen.effects().unwrap();

    screen.dispatch(SearchEvent::GetSearch { home_id: 5, word: " box ".into() });
    screen.settle().await;

    let state = screen.snapshot();
    assert_eq!(state.search_word, "box");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.notice(), None);

    screen.dispatch(SearchEvent::ItemClicked(1));
    assert_eq!(effects.try_recv().ok(), Some(SearchEffect::OpenItem(1)));
}

#[tokio::test]
async fn test_accepted_invitation_leaves_the_list() {
    let session = Arc::new(SessionContext::new());
    session.set_user(7);
    let screen = AccountScreen::new(
        UserUseCases::new(Arc::new(MockUsers)),
        InvitationUseCases::new(Arc::new(MockInvitations::default())),
        session,
    );
    let mut effects = screen.effects().unwrap();

    screen.dispatch(AccountEvent::GetInvitations(7));
    screen.settle().await;
    assert_eq!(screen.snapshot().invitations.len(), 2);

    screen.dispatch(AccountEvent::AcceptInvitation(11));
    screen.settle().await;

    let state = screen.snapshot();
    assert_eq!(state.invitations.iter().map(|i| i.id).collect::<Vec<_>>(), vec![12]);
    assert_eq!(effects.try_recv().ok(), Some(AccountEffect::InvitationResolved(11)));

    screen.dispatch(AccountEvent::RejectInvitation(11));
    screen.settle().await;

    assert!(screen.snapshot().error.is_some());
    assert!(effects.try_recv().is_err());
}

#[tokio::test]
async fn test_deleting_account_clears_session() {
    let session = Arc::new(SessionContext::new());
    session.set_user(7);
    session.set_home(5);
    let screen = AccountScreen::new(
        UserUseCases::new(Arc::new(MockUsers)),
        InvitationUseCases::new(Arc::new(MockInvitations::default())),
        Arc::clone(&session),
    );
    let mut effects = screen.effects().unwrap();

    screen.dispatch(AccountEvent::DeleteUser);
    screen.settle().await;

    assert_eq!(session.user_id(), None);
    assert_eq!(session.home_id(), None);
    assert_eq!(effects.try_recv().ok(), Some(AccountEffect::AccountDeleted));
}

#[tokio::test]
async fn test_register_then_duplicate() {
    let screen = RegisterScreen::new(UserUseCases::new(Arc::new(MockUsers)));
    let mut effects = screen.effects().unwrap();

    screen.dispatch(RegisterEvent::UsernameChanged("ana".into()));
    screen.dispatch(RegisterEvent::PasswordChanged("secret".into()));
    screen.dispatch(RegisterEvent::EmailChanged("ana@example.com".into()));
    screen.dispatch(RegisterEvent::Register);
    screen.settle().await;

    assert_eq!(effects.try_recv().ok(), Some(RegisterEffect::Registered));
    assert_eq!(screen.snapshot().error, None);

    screen.dispatch(RegisterEvent::UsernameChanged("taken".into()));
    screen.dispatch(RegisterEvent::Register);
    screen.settle().await;

    assert!(effects.try_recv().is_err());
    assert_eq!(
        screen.snapshot().error.as_deref(),
        Some("Username or email already exists")
    );
}

#[tokio::test]
async fn test_create_home_opens_it_once() {
    let session = Arc::new(SessionContext::new());
    session.set_user(3);
    let screen = MyHomesScreen::new(HomeUseCases::new(Arc::new(MockHomes::default())), session);
    let mut effects = screen.effects().unwrap();

    screen.dispatch(MyHomesEvent::ShowCreateDialog);
    screen.dispatch(MyHomesEvent::CreateHome(" Flat ".into()));
    screen.settle().await;

    let state = screen.snapshot();
    assert_eq!(state.owned, vec![Home { id: 77, name: "Flat".into(), owner: 3 }]);
    assert!(!state.show_create_dialog);
    assert_eq!(effects.try_recv().ok(), Some(MyHomesEffect::OpenHome(77)));
    assert!(effects.try_recv().is_err());
}

fn home_screen(
    homes: MockHomes,
    invitations: Arc<MockInvitations>,
    session: Arc<SessionContext>,
) -> HomeScreen {
    HomeScreen::new(
        HomeUseCases::new(Arc::new(homes)),
        UserUseCases::new(Arc::new(MockUsers)),
        InvitationUseCases::new(invitations),
        session,
    )
}

fn flat() -> Home {
    Home { id: 5, name: "Flat".into(), owner: 3 }
}

#[tokio::test]
async fn test_get_home_records_session_home() {
    let session = Arc::new(SessionContext::new());
    session.set_user(3);
    let screen = home_screen(
        MockHomes::with(vec![flat()]),
        Arc::new(MockInvitations::default()),
        Arc::clone(&session),
    );

    screen.dispatch(HomeEvent::GetHome(5));
    screen.settle().await;

    let state = screen.snapshot();
    assert_eq!(state.home, Some(flat()));
    assert!(state.is_owner);
    assert_eq!(session.home_id(), Some(5));
}

#[tokio::test]
async fn test_member_does_not_own_home() {
    let session = Arc::new(SessionContext::new());
    session.set_user(8);
    let screen = home_screen(
        MockHomes::with(vec![flat()]),
        Arc::new(MockInvitations::default()),
        session,
    );

    screen.dispatch(HomeEvent::GetHome(5));
    screen.settle().await;

    let state = screen.snapshot();
    assert!(state.home.is_some());
    assert!(!state.is_owner);
}

#[tokio::test]
async fn test_missing_home_keeps_session() {
    let session = Arc::new(SessionContext::new());
    session.set_user(3);
    let screen = home_screen(
        MockHomes::default(),
        Arc::new(MockInvitations::default()),
        Arc::clone(&session),
    );

    screen.dispatch(HomeEvent::GetHome(5));
    screen.settle().await;

    assert!(screen.snapshot().error.is_some());
    assert_eq!(session.home_id(), None);
}

#[tokio::test]
async fn test_delete_home_clears_session_home() {
    let session = Arc::new(SessionContext::new());
    session.set_user(3);
    let screen = home_screen(
        MockHomes::with(vec![flat()]),
        Arc::new(MockInvitations::default()),
        Arc::clone(&session),
    );
    let mut effects = screen.effects().unwrap();

    screen.dispatch(HomeEvent::GetHome(5));
    screen.settle().await;
    screen.dispatch(HomeEvent::DeleteHome);
    screen.settle().await;

    assert_eq!(screen.snapshot().home, None);
    assert_eq!(session.home_id(), None);
    assert_eq!(session.user_id(), Some(3));
    assert_eq!(effects.try_recv().ok(), Some(HomeEffect::HomeDeleted));
}

#[tokio::test]
async fn test_invite_user_sends_invitation() {
    let session = Arc::new(SessionContext::new());
    session.set_user(3);
    session.set_home(5);
    let invitations = Arc::new(MockInvitations::default());
    let screen = home_screen(MockHomes::default(), Arc::clone(&invitations), session);
    let mut effects = screen.effects().unwrap();

    screen.dispatch(HomeEvent::ShowInviteDialog);
    screen.dispatch(HomeEvent::InviteUser(" bo ".into()));
    screen.settle().await;

    assert!(!screen.snapshot().show_invite_dialog);
    assert_eq!(effects.try_recv().ok(), Some(HomeEffect::InvitationSent));
    assert_eq!(
        *invitations.sent.lock().unwrap(),
        vec![InvitationToSend { inviter_id: 3, invitee_username: "bo".into(), home_id: 5 }]
    );
}

#[tokio::test]
async fn test_create_furniture_opens_it_once() {
    let kitchen = Room { id: 1, name: "Kitchen".into(), home_id: 5 };
    let screen = RoomScreen::new(
        RoomUseCases::new(Arc::new(MockRooms::with(vec![kitchen]))),
        FurnitureUseCases::new(Arc::new(MockFurniture::default())),
    );
    let mut effects = screen.effects().unwrap();

    screen.dispatch(RoomEvent::GetRoom(1));
    screen.settle().await;
    screen.dispatch(RoomEvent::CreateFurniture("Shelf".into()));
    screen.settle().await;

    assert_eq!(
        screen.snapshot().furniture,
        vec![Furniture { id: 9, name: "Shelf".into(), room_id: 1 }]
    );
    assert_eq!(effects.try_recv().ok(), Some(RoomEffect::OpenFurniture(9)));
    assert!(effects.try_recv().is_err());
}

#[tokio::test]
async fn test_rename_and_delete_room() {
    let rooms = Arc::new(MockRooms::with(vec![Room { id: 1, name: "Kitchen".into(), home_id: 5 }]));
    let screen = RoomScreen::new(
        RoomUseCases::new(rooms.clone()),
        FurnitureUseCases::new(Arc::new(MockFurniture::default())),
    );
    let mut effects = screen.effects().unwrap();

    screen.dispatch(RoomEvent::RenameRoom("Pantry".into()));
    assert_eq!(screen.snapshot().error.as_deref(), Some("No room is loaded"));
    screen.dispatch(RoomEvent::ErrorDisplayed);

    screen.dispatch(RoomEvent::GetRoom(1));
    screen.settle().await;
    screen.dispatch(RoomEvent::ShowRenameDialog);
    screen.dispatch(RoomEvent::RenameRoom("Pantry".into()));
    screen.settle().await;

    let state = screen.snapshot();
    assert_eq!(state.room.map(|r| r.name).as_deref(), Some("Pantry"));
    assert!(!state.show_rename_dialog);

    screen.dispatch(RoomEvent::DeleteRoom);
    screen.settle().await;

    assert_eq!(screen.snapshot().room, None);
    assert_eq!(*rooms.deleted.lock().unwrap(), vec![1]);
    assert_eq!(effects.try_recv().ok(), Some(RoomEffect::RoomDeleted));
}

#[tokio::test]
async fn test_create_compartment_opens_it_once() {
    let shelf = Furniture { id: 9, name: "Shelf".into(), room_id: 1 };
    let screen = FurnitureScreen::new(
        FurnitureUseCases::new(Arc::new(MockFurniture::with(vec![shelf]))),
        CompartmentUseCases::new(Arc::new(MockCompartments::default())),
    );
    let mut effects = screen.effects().unwrap();

    screen.dispatch(FurnitureEvent::GetFurniture(9));
    screen.settle().await;
    screen.dispatch(FurnitureEvent::CreateCompartment("Top".into()));
    screen.settle().await;

    assert_eq!(
        screen.snapshot().compartments,
        vec![Compartment { id: 4, name: "Top".into(), furniture_id: 9 }]
    );
    assert_eq!(effects.try_recv().ok(), Some(FurnitureEffect::OpenCompartment(4)));
    assert!(effects.try_recv().is_err());
}

#[tokio::test]
async fn test_rename_and_delete_furniture() {
    let furniture = Arc::new(MockFurniture::with(vec![Furniture {
        id: 9,
        name: "Shelf".into(),
        room_id: 1,
    }]));
    let screen = FurnitureScreen::new(
        FurnitureUseCases::new(furniture.clone()),
        CompartmentUseCases::new(Arc::new(MockCompartments::default())),
    );
    let mut effects = screen.effects().unwrap();

    screen.dispatch(FurnitureEvent::GetFurniture(9));
    screen.settle().await;
    screen.dispatch(FurnitureEvent::ShowRenameDialog);
    screen.dispatch(FurnitureEvent::RenameFurniture("Bookcase".into()));
    screen.settle().await;

    let state = screen.snapshot();
    assert_eq!(state.furniture.map(|f| f.name).as_deref(), Some("Bookcase"));
    assert!(!state.show_rename_dialog);

    screen.dispatch(FurnitureEvent::DeleteFurniture);
    screen.settle().await;

    assert_eq!(screen.snapshot().furniture, None);
    assert_eq!(*furniture.deleted.lock().unwrap(), vec![9]);
    assert_eq!(effects.try_recv().ok(), Some(FurnitureEffect::FurnitureDeleted));
}

fn top_drawer() -> Compartment {
    Compartment { id: 4, name: "Top".into(), furniture_id: 9 }
}

#[tokio::test]
async fn test_create_item_cleans_tags_and_opens_it() {
    let items = Arc::new(MockItems::default());
    let screen = CompartmentScreen::new(
        CompartmentUseCases::new(Arc::new(MockCompartments::with(vec![top_drawer()]))),
        ItemUseCases::new(items.clone()),
    );
    let mut effects = screen.effects().unwrap();

    screen.dispatch(CompartmentEvent::GetCompartment(4));
    screen.settle().await;
    screen.dispatch(CompartmentEvent::CreateItem {
        name: "Scarf".into(),
        tags: vec![" winter ".into(), "".into(), "winter".into(), "wool".into()],
    });
    screen.settle().await;

    assert_eq!(
        *items.saved.lock().unwrap(),
        vec![NewItem {
            name: "Scarf".into(),
            compartment_id: 4,
            tags: vec!["winter".into(), "wool".into()],
        }]
    );
    assert_eq!(
        screen.snapshot().items,
        vec![Item { id: 30, name: "Scarf".into(), compartment_id: 4 }]
    );
    assert_eq!(effects.try_recv().ok(), Some(CompartmentEffect::OpenItem(30)));
    assert!(effects.try_recv().is_err());
}

#[tokio::test]
async fn test_rename_and_delete_compartment() {
    let compartments = Arc::new(MockCompartments::with(vec![top_drawer()]));
    let screen = CompartmentScreen::new(
        CompartmentUseCases::new(compartments.clone()),
        ItemUseCases::new(Arc::new(MockItems::default())),
    );
    let mut effects = screen.effects().unwrap();

    screen.dispatch(CompartmentEvent::GetCompartment(4));
    screen.settle().await;
    screen.dispatch(CompartmentEvent::ShowRenameDialog);
    screen.dispatch(CompartmentEvent::RenameCompartment("Upper drawer".into()));
    screen.settle().await;

    let state = screen.snapshot();
    assert_eq!(state.compartment.map(|c| c.name).as_deref(), Some("Upper drawer"));
    assert!(!state.show_rename_dialog);

    screen.dispatch(CompartmentEvent::DeleteCompartment);
    screen.settle().await;

    assert_eq!(screen.snapshot().compartment, None);
    assert_eq!(*compartments.deleted.lock().unwrap(), vec![4]);
    assert_eq!(effects.try_recv().ok(), Some(CompartmentEffect::CompartmentDeleted));
}

fn item_screen(items: Arc<MockItems>, session: Arc<SessionContext>) -> ItemScreen {
    ItemScreen::new(
        ItemUseCases::new(items),
        RoomUseCases::new(Arc::new(MockRooms::default())),
        FurnitureUseCases::new(Arc::new(MockFurniture::default())),
        CompartmentUseCases::new(Arc::new(MockCompartments::default())),
        session,
    )
}

#[tokio::test]
async fn test_update_item_keeps_known_tags() {
    let session = Arc::new(SessionContext::new());
    session.set_home(5);
    let items = Arc::new(MockItems::default());
    let screen = item_screen(items.clone(), session);

    screen.dispatch(ItemEvent::GetItem(9));
    screen.settle().await;
    screen.dispatch(ItemEvent::ShowEditDialog);
    screen.dispatch(ItemEvent::UpdateItem {
        name: " Wool scarf ".into(),
        tags: vec!["winter".into(), " gift ".into(), "gift".into()],
    });
    screen.settle().await;

    let expected = ItemDetail {
        id: 9,
        name: "Wool scarf".into(),
        compartment_id: 4,
        tags: vec![
            winter_tag(),
            Tag { id: UNSAVED_ID, name: "gift".into(), home_id: 5 },
        ],
    };
    assert_eq!(*items.updated.lock().unwrap(), vec![expected.clone()]);

    let state = screen.snapshot();
    assert_eq!(state.item, Some(expected));
    assert!(!state.show_edit_dialog);
}

#[tokio::test]
async fn test_new_tag_needs_a_home() {
    let items = Arc::new(MockItems::default());
    let screen = item_screen(items.clone(), Arc::new(SessionContext::new()));

    screen.dispatch(ItemEvent::GetItem(9));
    screen.settle().await;
    screen.dispatch(ItemEvent::UpdateItem {
        name: "Scarf".into(),
        tags: vec!["gift".into()],
    });
    screen.settle().await;

    assert_eq!(screen.snapshot().error.as_deref(), Some("No home is selected"));
    assert!(items.updated.lock().unwrap().is_empty());

    screen.dispatch(ItemEvent::ErrorDisplayed);
    screen.dispatch(ItemEvent::UpdateItem {
        name: "Scarf".into(),
        tags: vec!["winter".into()],
    });
    screen.settle().await;

    assert_eq!(screen.snapshot().error, None);
    assert_eq!(items.updated.lock().unwrap()[0].tags, vec![winter_tag()]);
}

#[tokio::test]
async fn test_delete_item() {
    let screen = item_screen(Arc::new(MockItems::default()), Arc::new(SessionContext::new()));
    let mut effects = screen.effects().unwrap();

    screen.dispatch(ItemEvent::GetItem(9));
    screen.settle().await;
    screen.dispatch(ItemEvent::DeleteItem);
    screen.settle().await;

    assert_eq!(screen.snapshot().item, None);
    assert_eq!(effects.try_recv().ok(), Some(ItemEffect::ItemDeleted));
}

#[tokio::test]
async fn test_dropping_screen_cancels_pending_work() {
    struct NeverRooms(Arc<AtomicUsize>);

    impl RoomRepository for NeverRooms {
        fn rooms_by_home(&self, _home_id: EntityId) -> ResourceStream<Vec<Room>> {
            let dropped = DropCounter(Arc::clone(&self.0));
            Box::pin(futures::StreamExt::chain(
                stream::iter(vec![Resource::Loading]),
                stream::unfold(dropped, |dropped| async move {
                    std::future::pending::<()>().await;
                    Some((Resource::Success(vec![]), dropped))
                }),
            ))
        }

        fn room_by_id(&self, _id: EntityId) -> ResourceStream<Room> {
            unsupported()
        }

        fn save_room(&self, _room: Room) -> ResourceStream<Room> {
            unsupported()
        }

        fn update_room(&self, _room: Room) -> ResourceStream<Room> {
            unsupported()
        }

        fn delete_room(&self, _id: EntityId) -> ResourceStream<()> {
            unsupported()
        }
    }

    struct DropCounter(Arc<AtomicUsize>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    let dropped = Arc::new(AtomicUsize::new(0));
    let screen = RoomsScreen::new(
        RoomUseCases::new(Arc::new(NeverRooms(Arc::clone(&dropped)))),
        Arc::new(SessionContext::new()),
    );
    let mut state = screen.state();

    screen.dispatch(RoomsEvent::GetRooms(5));
    state.wait_for(|s| s.is_loading).await.unwrap();

    drop(state);
    drop(screen);
    for _ in 0..10 {
        if dropped.load(Ordering::SeqCst) == 1 {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert_eq!(dropped.load(Ordering::SeqCst), 1);
}
