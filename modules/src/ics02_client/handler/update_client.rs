//! Protocol logic specific to processing ICS2 messages of type `MsgUpdateClient`.

use tracing::{debug, warn};

use crate::events::IbcEvent;
use crate::handler::{HandlerOutput, HandlerResult};
use crate::ics02_client::client_consensus::ConsensusState;
use crate::ics02_client::client_def::ClientDefs;
use crate::ics02_client::client_state::ClientState;
use crate::ics02_client::context::ClientReader;
use crate::ics02_client::error::Error;
use crate::ics02_client::events::Attributes;
use crate::ics02_client::handler::ClientResult;
use crate::ics02_client::msgs::update_client::MsgUpdateClient;
use crate::ics24_host::identifier::ClientId;

/// The result following the successful processing of a `MsgUpdateClient` message. Preferably
/// this data type should be used with a qualified name `update_client::Result` to avoid ambiguity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Result {
    pub client_id: ClientId,
    pub client_state: ClientState,
    pub consensus_state: ConsensusState,
}

pub fn process(
    ctx: &dyn ClientReader,
    client_defs: &ClientDefs,
    msg: MsgUpdateClient,
) -> HandlerResult<ClientResult, Error> {
    let mut output = HandlerOutput::builder();

    let MsgUpdateClient { client_id, header } = msg;

    // Read client state from the host chain store. The client should already exist.
    let client_state = ctx
        .client_state(&client_id)
        .ok_or_else(|| Error::client_not_found(client_id.clone()))?;

    let client_def = client_defs.client_def(client_state.client_type());

    // Validate the header against the client and return the advanced client state together
    // with the consensus state obtained from the header. These will be later persisted by the
    // keeper.
    let (new_client_state, new_consensus_state) = client_state
        .advance(client_def, &header)
        .map_err(|e| {
            warn!(%client_id, height = %header.height(), "rejected header: {}", e);
            e
        })?;

    debug!(
        %client_id,
        from = %client_state.latest_height(),
        to = %new_client_state.latest_height(),
        "client advanced"
    );

    output.emit(IbcEvent::UpdateClient(
        Attributes {
            client_id: client_id.clone(),
            client_type: new_client_state.client_type(),
            consensus_height: new_client_state.latest_height(),
        }
        .into(),
    ));

    Ok(output.with_result(ClientResult::Update(Result {
        client_id,
        client_state: new_client_state,
        consensus_state: new_consensus_state,
    })))
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::ics02_client::client_type::ClientType;
    use crate::ics02_client::context::ClientKeeper;
    use crate::ics02_client::error::ErrorDetail;
    use crate::ics02_client::handler::dispatch;
    use crate::ics02_client::msgs::ClientMsg;
    use crate::mock::client_def::MockClient;
    use crate::mock::context::MockContext;
    use crate::mock::header::mock_header;
    use crate::Height;

    #[test]
    fn test_update_client_ok() {
        let client_id: ClientId = "mockclient".parse().unwrap();
        let mut ctx =
            MockContext::default().with_client(&client_id, ClientType::Mock, Height::new(42));
        let defs = ClientDefs::new(MockClient::rejecting()).with_mock(MockClient::accepting());

        let msg = MsgUpdateClient::new(client_id.clone(), mock_header(ClientType::Mock, 46));

        let output = dispatch(&ctx, &defs, ClientMsg::UpdateClient(msg.clone())).unwrap();

        assert_eq!(output.events.len(), 1);
        match &output.events[0] {
            IbcEvent::UpdateClient(ev) => {
                assert_eq!(ev.client_id(), &client_id);
                assert_eq!(ev.consensus_height(), Height::new(46));
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(output.log.is_empty());

        ctx.store_client_result(output.result).unwrap();

        let client_state = ctx.client_state(&client_id).unwrap();
        assert_eq!(client_state.latest_height(), Height::new(46));
        assert_eq!(
            ctx.consensus_state(&client_id, Height::new(46)),
            Some(msg.header.consensus_state())
        );
    }

    #[test]
    fn test_update_nonexisting_client() {
        let client_id: ClientId = "mockclient1".parse().unwrap();
        let ctx = MockContext::default().with_client(&client_id, ClientType::Mock, Height::new(42));
        let defs = ClientDefs::new(MockClient::accepting());

        let msg = MsgUpdateClient::new(
            "nonexistingclient".parse().unwrap(),
            mock_header(ClientType::Mock, 46),
        );

        let err = process(&ctx, &defs, msg.clone()).unwrap_err();
        match err.detail() {
            ErrorDetail::ClientNotFound(e) => assert_eq!(e.client_id, msg.client_id),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_update_client_ok_multiple() {
        let client_ids: Vec<ClientId> = vec![
            "mockclient1".parse().unwrap(),
            "mockclient2".parse().unwrap(),
            "mockclient3".parse().unwrap(),
        ];

        let initial_height = Height::new(45);
        let update_height = 49;

        let mut ctx = MockContext::default();
        for cid in &client_ids {
            ctx = ctx.with_client(cid, ClientType::Mock, initial_height);
        }
        let defs = ClientDefs::new(MockClient::accepting());

        for cid in &client_ids {
            let msg = MsgUpdateClient::new(cid.clone(), mock_header(ClientType::Mock, update_height));

            let output = process(&ctx, &defs, msg).unwrap();
            assert!(matches!(output.events[0], IbcEvent::UpdateClient(_)));
            ctx.store_client_result(output.result).unwrap();
        }

        for cid in &client_ids {
            let client_state = ctx.client_state(cid).unwrap();
            assert_eq!(client_state.latest_height(), Height::new(update_height));
        }
    }

    #[test]
    fn test_stale_update_leaves_store_unchanged() {
        let client_id: ClientId = "mockclient".parse().unwrap();
        let ctx = MockContext::default().with_client(&client_id, ClientType::Mock, Height::new(42));
        let defs = ClientDefs::new(MockClient::accepting());
        let before = ctx.clone();

        let msg = MsgUpdateClient::new(client_id, mock_header(ClientType::Mock, 42));
        let err = process(&ctx, &defs, msg).unwrap_err();

        assert!(matches!(err.detail(), ErrorDetail::StaleHeader(_)));
        assert_eq!(ctx, before);
    }

    #[test]
    fn test_update_frozen_client_fails() {
        let client_id: ClientId = "mockclient".parse().unwrap();
        let ctx = MockContext::default()
            .with_client(&client_id, ClientType::Mock, Height::new(42))
            .with_frozen_client(&client_id);
        let defs = ClientDefs::new(MockClient::accepting());

        let msg = MsgUpdateClient::new(client_id, mock_header(ClientType::Mock, 50));
        let err = process(&ctx, &defs, msg).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::ClientFrozen(_)));
    }
}
